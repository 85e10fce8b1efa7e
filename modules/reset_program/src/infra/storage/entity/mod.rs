pub mod completed_task;
pub mod plan;
pub mod reflection;
