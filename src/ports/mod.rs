//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: called by the HTTP adapter into the application
//! - Outbound: called by the application into the remote APIs
//! - Cleanup: outbound surface used only by the cleanup utility

pub mod cleanup;
pub mod inbound;
pub mod outbound;

pub use cleanup::{BoardCleanupPort, ProjectCleanupPort};
pub use inbound::SyncPort;
pub use outbound::{BoardSourcePort, ProjectSinkPort};
