pub mod config;
pub mod pipeline;

#[cfg(test)]
mod pipeline_test;
