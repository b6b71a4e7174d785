//! Cleanup outbound ports. List-and-delete surface for test data.
//!
//! Used only by the cleanup utility, never by the sync orchestrator.

use crate::domain::{Board, DomainError, Project, Workspace};

/// Source-side cleanup: enumerate and delete the member's boards.
#[async_trait::async_trait]
pub trait BoardCleanupPort: Send + Sync {
    /// All boards visible to the authenticated member.
    async fn list_boards(&self) -> Result<Vec<Board>, DomainError>;

    /// Delete a board. `RateLimited` on HTTP 429.
    async fn delete_board(&self, board_id: &str) -> Result<(), DomainError>;
}

/// Destination-side cleanup: enumerate workspaces and delete their projects.
#[async_trait::async_trait]
pub trait ProjectCleanupPort: Send + Sync {
    /// All workspaces visible to the authenticated user.
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, DomainError>;

    /// Projects in one workspace.
    async fn list_projects(&self, workspace_gid: &str) -> Result<Vec<Project>, DomainError>;

    /// Delete a project. `RateLimited` on HTTP 429.
    async fn delete_project(&self, project_gid: &str) -> Result<(), DomainError>;
}
