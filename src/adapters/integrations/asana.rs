//! Asana adapter. Implements the sink ports via the Asana REST API.
//!
//! Bearer-token authenticated; the token is fixed at construction. Request
//! and response payloads are wrapped in Asana's `{"data": ...}` envelope;
//! the envelope is unwrapped here and never leaks into the domain.

use crate::domain::{DomainError, NewTask, Project, Section, TaskRecord, Workspace};
use crate::ports::{ProjectCleanupPort, ProjectSinkPort};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

const ASANA_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Asana API client.
pub struct AsanaClient {
    client: Client,
    base_url: String,
    access_token: String,
}

/// Asana wraps every payload in a data envelope.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

impl AsanaClient {
    /// Create a client against the production API.
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, ASANA_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (tests).
    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            access_token,
        }
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        op: &str,
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Request failed: {e}")))?;

        // The remote's error body is not parsed; writes fail with a static
        // per-operation message.
        ensure_success(op, res.status())?;

        let envelope: Envelope<T> = res
            .json()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Failed to parse API response: {e}")))?;
        Ok(envelope.data)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        op: &str,
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Request failed: {e}")))?;

        ensure_success(op, res.status())?;

        let envelope: Envelope<T> = res
            .json()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Failed to parse API response: {e}")))?;
        Ok(envelope.data)
    }
}

fn ensure_success(op: &str, status: StatusCode) -> Result<(), DomainError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(DomainError::RateLimited);
    }
    if !status.is_success() {
        return Err(DomainError::RequestFailed(op.to_string()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl ProjectSinkPort for AsanaClient {
    async fn create_project(
        &self,
        name: &str,
        workspace_id: &str,
    ) -> Result<Project, DomainError> {
        self.post_json(
            "/projects",
            json!({"data": {"name": name, "workspace": workspace_id}}),
            "Failed to create project",
        )
        .await
    }

    async fn create_section(
        &self,
        name: &str,
        project_id: &str,
    ) -> Result<Section, DomainError> {
        self.post_json(
            "/sections",
            json!({"data": {"name": name, "project": project_id}}),
            "Failed to create section",
        )
        .await
    }

    async fn create_task(&self, task: &NewTask) -> Result<TaskRecord, DomainError> {
        self.post_json("/tasks", json!({"data": task}), "Failed to create task")
            .await
    }
}

#[async_trait::async_trait]
impl ProjectCleanupPort for AsanaClient {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, DomainError> {
        self.get_json("/workspaces", "Failed to list workspaces")
            .await
    }

    async fn list_projects(&self, workspace_gid: &str) -> Result<Vec<Project>, DomainError> {
        self.get_json(
            &format!("/workspaces/{workspace_gid}/projects"),
            "Failed to list projects",
        )
        .await
    }

    async fn delete_project(&self, project_gid: &str) -> Result<(), DomainError> {
        let url = format!("{}/projects/{}", self.base_url, project_gid);
        let res = self
            .client
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("Request failed: {e}")))?;

        ensure_success("Failed to delete project", res.status())
    }
}
