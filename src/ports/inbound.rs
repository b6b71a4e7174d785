//! Inbound port. The HTTP adapter calls into the application.

use crate::domain::{DomainError, SyncReport};

/// Input port: one sync run for a (board, workspace) pair.
///
/// Implemented by `SyncService`. The HTTP adapter holds this as a trait
/// object so endpoint tests can drive the router with a scripted
/// implementation.
#[async_trait::async_trait]
pub trait SyncPort: Send + Sync {
    /// Copy the board's lists and cards into a fresh project in `workspace_id`.
    ///
    /// Strictly sequential; the first failure aborts the run with no rollback
    /// of already-created destination resources.
    async fn sync_board_to_project(
        &self,
        board_id: &str,
        workspace_id: &str,
    ) -> Result<SyncReport, DomainError>;
}
