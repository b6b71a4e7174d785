//! Domain layer: entities and errors.

pub mod entities;
pub mod errors;

pub use entities::{
    Board, Card, Label, List, NewTask, Project, Section, SyncReport, TaskRecord, Workspace,
};
pub use errors::DomainError;
