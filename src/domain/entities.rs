//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — adapters map wire payloads into these. Trello
//! field names are kept on the wire via serde renames; Asana responses are
//! unwrapped from their `{"data": ...}` envelope by the adapter.

use serde::{Deserialize, Serialize};

/// A Trello board. Top-level source container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub closed: bool,
}

/// A Trello list. Named grouping of cards within a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    /// Board-order position. Trello uses fractional positions.
    #[serde(default)]
    pub pos: f64,
    #[serde(rename = "idBoard", default)]
    pub board_id: String,
}

/// A Trello card. Single unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    /// ISO timestamp or null. Forwarded to the task as-is.
    #[serde(default)]
    pub due: Option<String>,
    #[serde(rename = "idList", default)]
    pub list_id: String,
    #[serde(rename = "idMembers", default)]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// A Trello card label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// An Asana project. Created once per sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub resource_type: String,
}

/// An Asana section within a project. Created once per source list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub resource_type: String,
}

/// An Asana task as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_on: Option<String>,
    #[serde(default)]
    pub resource_type: String,
}

/// Parameters for creating an Asana task. `None` fields are omitted from the
/// request body entirely, never sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
    pub projects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// An Asana workspace. Used by the cleanup utility only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub gid: String,
    pub name: String,
}

/// Aggregate outcome of one successful sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub project_gid: String,
    pub sections_created: usize,
    pub tasks_created: usize,
}
