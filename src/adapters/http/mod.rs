//! HTTP inbound adapter. axum router and the sync endpoint.

pub mod api;

pub use api::router;
