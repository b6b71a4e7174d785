//! The sync endpoint: `POST /sync/board`.
//!
//! Field validation happens here at the boundary and never crosses a port.
//! Every orchestrator failure maps to a 500 envelope carrying the error's
//! message verbatim, not-found included.

use crate::ports::SyncPort;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;

const SYNC_OK_MESSAGE: &str = "Sync completed successfully";

/// Handler state: the application behind its inbound port.
#[derive(Clone)]
struct AppState {
    sync: Arc<dyn SyncPort>,
}

/// Build the sync API router.
pub fn router(sync: Arc<dyn SyncPort>) -> Router {
    Router::new()
        .route("/sync/board", post(sync_board))
        .with_state(AppState { sync })
}

async fn sync_board(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    // A missing or malformed JSON body validates like an empty object.
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    let errors = validate(&body);
    if !errors.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "statusCode": 400,
                "message": errors,
                "error": "Bad Request",
            })),
        )
            .into_response();
    }

    // Validation guarantees both fields are non-empty strings.
    let board_id = body["boardId"].as_str().unwrap_or_default();
    let workspace_id = body["workspaceId"].as_str().unwrap_or_default();

    match state.sync.sync_board_to_project(board_id, workspace_id).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(json!({
                "statusCode": 201,
                "success": true,
                "message": SYNC_OK_MESSAGE,
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "statusCode": 500,
                "message": e.to_string(),
            })),
        )
            .into_response(),
    }
}

/// Per-field validation messages, in field declaration order. A missing or
/// null field yields both messages; a non-string only the type message; an
/// empty string only the emptiness message.
fn validate(body: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    for field in ["boardId", "workspaceId"] {
        match body.get(field) {
            None | Some(Value::Null) => {
                errors.push(format!("{field} should not be empty"));
                errors.push(format!("{field} must be a string"));
            }
            Some(Value::String(s)) if s.is_empty() => {
                errors.push(format!("{field} should not be empty"));
            }
            Some(Value::String(_)) => {}
            Some(_) => errors.push(format!("{field} must be a string")),
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_flags_both_fields() {
        assert_eq!(
            validate(&json!({})),
            vec![
                "boardId should not be empty",
                "boardId must be a string",
                "workspaceId should not be empty",
                "workspaceId must be a string",
            ]
        );
    }

    #[test]
    fn null_counts_as_missing() {
        assert_eq!(
            validate(&json!({"boardId": null, "workspaceId": "ws"})),
            vec!["boardId should not be empty", "boardId must be a string"]
        );
    }

    #[test]
    fn wrong_type_flags_only_the_type() {
        assert_eq!(
            validate(&json!({"boardId": 42, "workspaceId": "ws"})),
            vec!["boardId must be a string"]
        );
    }

    #[test]
    fn blank_string_flags_only_emptiness() {
        assert_eq!(
            validate(&json!({"boardId": "b", "workspaceId": ""})),
            vec!["workspaceId should not be empty"]
        );
    }

    #[test]
    fn valid_body_passes() {
        assert!(validate(&json!({"boardId": "b", "workspaceId": "ws"})).is_empty());
    }
}
