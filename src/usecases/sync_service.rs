//! Sync orchestrator: board -> project, lists -> sections, cards -> tasks.
//!
//! Strictly sequential: list N+1 is not started until all cards of list N
//! are done. The first failure at any step aborts the run; resources already
//! created in the destination are left as-is (no rollback, no compensation).

use crate::domain::{DomainError, NewTask, SyncReport};
use crate::ports::{BoardSourcePort, ProjectSinkPort, SyncPort};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Sync service. Coordinates one source reader and one destination writer.
pub struct SyncService {
    source: Arc<dyn BoardSourcePort>,
    sink: Arc<dyn ProjectSinkPort>,
}

impl SyncService {
    pub fn new(source: Arc<dyn BoardSourcePort>, sink: Arc<dyn ProjectSinkPort>) -> Self {
        Self { source, sink }
    }

    async fn run(&self, board_id: &str, workspace_id: &str) -> Result<SyncReport, DomainError> {
        let board = self.source.get_board(board_id).await?;
        debug!(board_id, board = %board.name, "fetched source board");

        let project = self.sink.create_project(&board.name, workspace_id).await?;
        debug!(project_gid = %project.gid, "created destination project");

        let mut lists = self.source.get_board_lists(board_id).await?;
        debug!(board_id, lists = lists.len(), "fetched source lists");
        // Board order, not API return order. Stable: equal positions keep
        // the order the remote returned.
        lists.sort_by(|a, b| a.pos.total_cmp(&b.pos));

        let mut report = SyncReport {
            project_gid: project.gid.clone(),
            ..Default::default()
        };

        for list in &lists {
            let section = self.sink.create_section(&list.name, &project.gid).await?;
            report.sections_created += 1;

            let cards = self.source.get_list_cards(&list.id).await?;
            debug!(list = %list.name, cards = cards.len(), "fetched cards for list");

            for card in &cards {
                self.sink
                    .create_task(&NewTask {
                        name: card.name.clone(),
                        notes: Some(card.desc.clone()),
                        due_on: card.due.clone(),
                        projects: vec![project.gid.clone()],
                        section: Some(section.gid.clone()),
                    })
                    .await?;
                report.tasks_created += 1;
            }
        }

        Ok(report)
    }
}

#[async_trait::async_trait]
impl SyncPort for SyncService {
    async fn sync_board_to_project(
        &self,
        board_id: &str,
        workspace_id: &str,
    ) -> Result<SyncReport, DomainError> {
        info!(board_id, workspace_id, "starting sync run");
        match self.run(board_id, workspace_id).await {
            Ok(report) => {
                info!(
                    board_id,
                    project_gid = %report.project_gid,
                    sections = report.sections_created,
                    tasks = report.tasks_created,
                    "sync completed"
                );
                Ok(report)
            }
            Err(e) => {
                error!(board_id, workspace_id, error = %e, "sync aborted");
                Err(e)
            }
        }
    }
}
