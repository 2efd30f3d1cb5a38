//! Error taxonomy for repository calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one `ApiError` carrying a display message.
//! Views render `to_string()` directly, so `Display` never adds prefixes.

/// Failure of a repository or login call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network unreachable, unreadable body, or a body that is not the JSON
    /// shape the endpoint promises.
    #[error("{0}")]
    Transport(String),
    /// Well-formed error response from the server.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Required input missing before any request was made.
    #[error("{0}")]
    Validation(String),
}
