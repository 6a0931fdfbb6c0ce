pub mod analytics;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod status;
pub mod update;
pub mod utils;

// Re-export handler functions for use in routing
pub use analytics::analytics as project_analytics;
pub use create::create as create_project;
pub use delete::delete as delete_project;
pub use get::get as get_project;
pub use list::list as list_projects;
pub use status::status as project_status;
pub use update::update as update_project;
