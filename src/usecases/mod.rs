//! Application use cases. Orchestrate domain logic via ports.

pub mod cleanup_service;
pub mod sync_service;

pub use cleanup_service::{CleanupService, CleanupStats};
pub use sync_service::SyncService;
