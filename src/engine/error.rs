//! Engine-specific error handling.

use thiserror::Error;

/// Errors raised by the session engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A session was requested from an empty commit group. The segmenter
    /// never produces empty groups, so hitting this is a contract violation
    /// in the caller, not a user error.
    #[error("Cannot build a session from an empty commit group")]
    EmptyCommitGroup,
}

// Note: anyhow already has a blanket impl for thiserror::Error types
