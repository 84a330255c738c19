//! Request rejection and configuration errors
//!
//! The engine does no I/O while playing, so every runtime error is a refused
//! request. A rejection never mutates session state.

use crate::sim::GamePhase;

/// Why the session refused a request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestRejected {
    /// A flight or roll is still being integrated
    #[error("a shot is still in motion")]
    ShotInProgress,
    /// The request is not valid in the current phase
    #[error("cannot {action} during {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },
}

/// Invalid tuning data
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
