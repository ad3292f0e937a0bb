pub mod executor;
pub mod git_info;
pub mod tag_source;

#[cfg(test)]
mod executor_test;
