pub mod analytics;
pub mod create;
pub mod delete;
pub mod get;
pub mod join;
pub mod list;
pub mod reset_invite;
pub mod update;
pub mod utils;

// Re-export handler functions for use in routing
pub use analytics::analytics as workspace_analytics;
pub use create::create as create_workspace;
pub use delete::delete as delete_workspace;
pub use get::get as get_workspace;
pub use join::join as join_workspace;
pub use list::list as list_workspaces;
pub use reset_invite::reset_invite as reset_invite_code;
pub use update::update as update_workspace;
