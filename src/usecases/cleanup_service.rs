//! Test-data cleanup: list and delete marker-named boards and projects.
//!
//! Operationally separate from the sync path, and the only place with any
//! pacing or backoff: a fixed pause between deletions, and a single retry
//! after a longer pause when the remote answers 429. Per-item failures are
//! logged and skipped; the pass continues.

use crate::domain::DomainError;
use crate::ports::{BoardCleanupPort, ProjectCleanupPort};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Name markers identifying disposable test data.
const TEST_NAME_MARKERS: &[&str] = &["Test", "Teste", "Integration", "Integração"];

/// Cleanup service. Sweeps both remotes sequentially to respect rate limits.
pub struct CleanupService {
    boards: Arc<dyn BoardCleanupPort>,
    projects: Arc<dyn ProjectCleanupPort>,
    /// Pause between deletions.
    pace: Duration,
    /// Pause before the single retry after a 429.
    backoff: Duration,
}

/// Aggregate outcome of one cleanup run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanupStats {
    pub boards_deleted: usize,
    pub projects_deleted: usize,
}

impl CleanupService {
    pub fn new(
        boards: Arc<dyn BoardCleanupPort>,
        projects: Arc<dyn ProjectCleanupPort>,
        pace: Duration,
        backoff: Duration,
    ) -> Self {
        Self {
            boards,
            projects,
            pace,
            backoff,
        }
    }

    /// Run both passes. Never fails: list-level errors skip the pass,
    /// item-level errors skip the item.
    pub async fn run(&self) -> CleanupStats {
        let boards_deleted = self.cleanup_boards().await;
        let projects_deleted = self.cleanup_projects().await;
        info!(boards_deleted, projects_deleted, "cleanup finished");
        CleanupStats {
            boards_deleted,
            projects_deleted,
        }
    }

    async fn cleanup_boards(&self) -> usize {
        let boards = match self.boards.list_boards().await {
            Ok(boards) => boards,
            Err(e) => {
                error!(error = %e, "failed to list boards, skipping board pass");
                return 0;
            }
        };

        let mut deleted = 0;
        for board in boards.iter().filter(|b| is_test_name(&b.name)) {
            info!(board = %board.name, "deleting test board");
            if self.delete_board_paced(&board.id, &board.name).await {
                deleted += 1;
            }
        }
        info!(deleted, "board pass done");
        deleted
    }

    async fn cleanup_projects(&self) -> usize {
        let workspaces = match self.projects.list_workspaces().await {
            Ok(workspaces) => workspaces,
            Err(e) => {
                error!(error = %e, "failed to list workspaces, skipping project pass");
                return 0;
            }
        };

        let mut deleted = 0;
        for workspace in &workspaces {
            let projects = match self.projects.list_projects(&workspace.gid).await {
                Ok(projects) => projects,
                Err(e) => {
                    warn!(workspace = %workspace.name, error = %e, "failed to list projects, skipping workspace");
                    continue;
                }
            };

            for project in projects.iter().filter(|p| is_test_name(&p.name)) {
                info!(project = %project.name, workspace = %workspace.name, "deleting test project");
                if self.delete_project_paced(&project.gid, &project.name).await {
                    deleted += 1;
                }
            }
        }
        info!(deleted, "project pass done");
        deleted
    }

    async fn delete_board_paced(&self, board_id: &str, name: &str) -> bool {
        let outcome = match self.boards.delete_board(board_id).await {
            Err(DomainError::RateLimited) => {
                warn!(
                    board = %name,
                    backoff_ms = self.backoff.as_millis() as u64,
                    "rate limited, backing off before retry"
                );
                sleep(self.backoff).await;
                self.boards.delete_board(board_id).await
            }
            other => other,
        };
        sleep(self.pace).await;
        match outcome {
            Ok(()) => {
                info!(board = %name, "board deleted");
                true
            }
            Err(e) => {
                warn!(board = %name, error = %e, "failed to delete board, skipping");
                false
            }
        }
    }

    async fn delete_project_paced(&self, project_gid: &str, name: &str) -> bool {
        let outcome = match self.projects.delete_project(project_gid).await {
            Err(DomainError::RateLimited) => {
                warn!(
                    project = %name,
                    backoff_ms = self.backoff.as_millis() as u64,
                    "rate limited, backing off before retry"
                );
                sleep(self.backoff).await;
                self.projects.delete_project(project_gid).await
            }
            other => other,
        };
        sleep(self.pace).await;
        match outcome {
            Ok(()) => {
                info!(project = %name, "project deleted");
                true
            }
            Err(e) => {
                warn!(project = %name, error = %e, "failed to delete project, skipping");
                false
            }
        }
    }
}

/// Whether a name marks the item as disposable test data.
fn is_test_name(name: &str) -> bool {
    TEST_NAME_MARKERS.iter().any(|marker| name.contains(marker))
}
