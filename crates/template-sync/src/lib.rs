pub mod template;
pub mod update;
