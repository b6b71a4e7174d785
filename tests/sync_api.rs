//! Endpoint contract tests. Drive the router over a real listener with a
//! scripted sync port, asserting the exact response envelopes.

use board_sync::adapters::http;
use board_sync::domain::{DomainError, SyncReport};
use board_sync::ports::SyncPort;
use serde_json::{json, Value};
use std::sync::Arc;

/// Scripted application: outcome decided by the incoming identifiers.
struct ScriptedSync;

#[async_trait::async_trait]
impl SyncPort for ScriptedSync {
    async fn sync_board_to_project(
        &self,
        board_id: &str,
        workspace_id: &str,
    ) -> Result<SyncReport, DomainError> {
        if board_id == "invalid-board" {
            return Err(DomainError::NotFound("Board"));
        }
        if workspace_id == "invalid-workspace" {
            return Err(DomainError::RequestFailed("Failed to create project".into()));
        }
        Ok(SyncReport {
            project_gid: "project1".into(),
            sections_created: 1,
            tasks_created: 1,
        })
    }
}

async fn spawn_api() -> String {
    let router = http::router(Arc::new(ScriptedSync));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn post_sync(base: &str, body: &Value) -> (u16, Value) {
    let res = reqwest::Client::new()
        .post(format!("{base}/sync/board"))
        .json(body)
        .send()
        .await
        .unwrap();
    let status = res.status().as_u16();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn successful_sync_returns_created() {
    let base = spawn_api().await;

    let (status, body) = post_sync(
        &base,
        &json!({"boardId": "board123", "workspaceId": "workspace123"}),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(
        body,
        json!({
            "statusCode": 201,
            "success": true,
            "message": "Sync completed successfully",
        })
    );
}

#[tokio::test]
async fn unknown_board_maps_to_internal_error_with_verbatim_message() {
    let base = spawn_api().await;

    let (status, body) = post_sync(
        &base,
        &json!({"boardId": "invalid-board", "workspaceId": "workspace123"}),
    )
    .await;

    // Deliberately 500, not 404: every orchestrator failure folds into the
    // same envelope.
    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({
            "statusCode": 500,
            "message": "Board not found",
        })
    );
}

#[tokio::test]
async fn failed_destination_write_maps_to_internal_error() {
    let base = spawn_api().await;

    let (status, body) = post_sync(
        &base,
        &json!({"boardId": "board123", "workspaceId": "invalid-workspace"}),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({
            "statusCode": 500,
            "message": "Failed to create project",
        })
    );
}

#[tokio::test]
async fn empty_body_reports_every_missing_field() {
    let base = spawn_api().await;

    let (status, body) = post_sync(&base, &json!({})).await;

    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        json!([
            "boardId should not be empty",
            "boardId must be a string",
            "workspaceId should not be empty",
            "workspaceId must be a string",
        ])
    );
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn blank_fields_are_rejected() {
    let base = spawn_api().await;

    let (status, body) = post_sync(&base, &json!({"boardId": "", "workspaceId": ""})).await;

    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        json!([
            "boardId should not be empty",
            "workspaceId should not be empty",
        ])
    );
}

#[tokio::test]
async fn wrong_field_type_is_rejected() {
    let base = spawn_api().await;

    let (status, body) = post_sync(
        &base,
        &json!({"boardId": 42, "workspaceId": "workspace123"}),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], json!(["boardId must be a string"]));
}
