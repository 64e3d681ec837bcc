//! Error types for the audit engine.
//!
//! Two layers:
//! - `FetchFailure`: classified network-level outcomes with stable
//!   user-facing messages
//! - `AuditError`: what `run_audit` returns to the caller

use thiserror::Error;

/// Classified outcome of a failed fetch attempt. Every transport-level error
/// is mapped onto one of these; raw client errors never cross this boundary.
/// The `Display` strings are the stable user-facing sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("Invalid URL format")]
    InvalidUrl,

    /// DNS lookup failed or the server returned 404.
    #[error("Website not found - please check the domain name is correct")]
    NotFound,

    /// The server returned 403.
    #[error("Access denied - the website blocks automated requests")]
    Blocked,

    #[error("Connection refused - the website may be down")]
    Down,

    #[error("Connection was reset - the website may be blocking requests")]
    BlockedOrReset,

    #[error("Website took too long to respond - please try again later")]
    TimedOut,

    #[error("Server error - the website is experiencing technical difficulties")]
    ServerError,

    #[error("Website content is too large to analyze")]
    TooLarge,

    #[error("Too many redirects - the website may have a redirect loop")]
    RedirectLoop,

    #[error("Unable to access website (HTTP {0})")]
    UnexpectedStatus(u16),
}

/// Errors surfaced by `AuditEngine::run_audit`. A fetch failure aborts the
/// whole audit; there is no partial report.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("{0}")]
    Fetch(#[from] FetchFailure),

    /// Unexpected internal fault (parser panic, joined task failure). The
    /// cause is attached for logging; callers report a generic failure.
    #[error("Audit failed: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
