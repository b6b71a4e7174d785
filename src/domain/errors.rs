//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Callers match on the
//! variant, never on the message text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Remote reports the resource does not exist (board lookup only).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Any other non-success response from a remote API.
    #[error("{0}")]
    RequestFailed(String),

    /// HTTP 429 from a remote API. The cleanup loop backs off and retries
    /// once; the sync path aborts like on any other error.
    #[error("rate limited by remote API")]
    RateLimited,
}
