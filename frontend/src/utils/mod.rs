pub mod file;
pub mod task;
