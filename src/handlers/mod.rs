pub mod auth;
pub mod forms;
pub mod members;
pub mod projects;
pub mod tasks;
pub mod workspaces;
