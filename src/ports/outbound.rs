//! Outbound ports. Application calls into the remote task systems.
//!
//! Implemented by adapters.

use crate::domain::{Board, Card, DomainError, List, NewTask, Project, Section, TaskRecord};

/// Source reader. Authenticated read access to boards, lists, and cards.
///
/// Each call issues exactly one request: single page, no retry. Credentials
/// are fixed at adapter construction.
#[async_trait::async_trait]
pub trait BoardSourcePort: Send + Sync {
    /// Fetch a board by id. `NotFound` when the remote reports absence.
    async fn get_board(&self, board_id: &str) -> Result<Board, DomainError>;

    /// Fetch the board's lists, in whatever order the remote returns them.
    async fn get_board_lists(&self, board_id: &str) -> Result<Vec<List>, DomainError>;

    /// Fetch a list's cards, in whatever order the remote returns them.
    async fn get_list_cards(&self, list_id: &str) -> Result<Vec<Card>, DomainError>;
}

/// Destination writer. Authenticated create access for projects, sections,
/// and tasks. Nothing created through this port is ever updated or deleted
/// by the sync path.
#[async_trait::async_trait]
pub trait ProjectSinkPort: Send + Sync {
    /// Create a project named `name` in the given workspace.
    async fn create_project(
        &self,
        name: &str,
        workspace_id: &str,
    ) -> Result<Project, DomainError>;

    /// Create a section named `name` under the given project.
    async fn create_section(&self, name: &str, project_id: &str)
        -> Result<Section, DomainError>;

    /// Create a task from the given parameters.
    async fn create_task(&self, task: &NewTask) -> Result<TaskRecord, DomainError>;
}
