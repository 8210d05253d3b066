pub mod store;
pub mod task_ops;
