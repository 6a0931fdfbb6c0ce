pub mod get;
pub mod list;

// Re-export handler functions for use in routing
pub use get::get as get_task;
pub use list::list as list_tasks;
