pub mod member;
pub mod project;
pub mod task;
pub mod user;
pub mod workspace;

pub use member::{Member, MemberRole, PopulatedMember};
pub use project::Project;
pub use task::{Task, TaskStatus};
pub use user::User;
pub use workspace::Workspace;

use serde::Serialize;

/// Collection names in the document store
pub mod collections {
    pub const WORKSPACES: &str = "workspaces";
    pub const MEMBERS: &str = "members";
    pub const PROJECTS: &str = "projects";
    pub const TASKS: &str = "tasks";
}

/// List payload returned by list endpoints: `{ documents, total }`
#[derive(Debug, Serialize)]
pub struct DocumentList<T: Serialize> {
    pub documents: Vec<T>,
    pub total: u64,
}

impl<T: Serialize> DocumentList<T> {
    pub fn empty() -> Self {
        Self { documents: Vec::new(), total: 0 }
    }
}
