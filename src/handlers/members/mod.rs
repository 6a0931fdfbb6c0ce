pub mod delete;
pub mod list;
pub mod update;
pub mod utils;

// Re-export handler functions for use in routing
pub use delete::delete as delete_member;
pub use list::list as list_members;
pub use update::update as update_member;
