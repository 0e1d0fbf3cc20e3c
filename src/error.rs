//! Failure taxonomy for the simulator.

use thiserror::Error;

/// The error type returned by simulator operations.
///
/// Every failure is detected before any state is produced, so a failed
/// call leaves all existing [`WorldState`](crate::WorldState) values
/// unchanged. Failures are deterministic; retrying with the same inputs
/// yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// An argument was outside the domain the operation is defined on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested operation is reserved but has no semantics yet.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// A specialised result type for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;
