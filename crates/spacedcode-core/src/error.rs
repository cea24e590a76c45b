//! Error types for the scheduling core
//!
//! Two failure families exist:
//! - Validation: input rejected before it reaches the engine (bad rating,
//!   bad session budget)
//! - State: a session transition attempted from an incompatible state
//!
//! An empty selection is NOT an error - both selector modes return an empty
//! result when nothing qualifies, and callers treat that as "nothing due".

use thiserror::Error;

use crate::session::SessionStatus;

/// Errors produced by the scheduling core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// Rating outside the 0-5 grade domain
    #[error("invalid rating {0}: must be an integer between 0 and 5")]
    InvalidRating(i64),
    /// Session duration budget outside the allowed range
    #[error("invalid session duration {0} minutes: must be between 5 and 300")]
    InvalidDuration(u32),
    /// Session transition attempted from a terminal or incompatible state.
    /// The session is left unchanged.
    #[error("cannot {action} a {from} session")]
    InvalidTransition {
        /// Status the session was in when the transition was attempted
        from: SessionStatus,
        /// The rejected action ("pause", "resume", ...)
        action: &'static str,
    },
}

/// Scheduling core result type
pub type Result<T> = std::result::Result<T, SchedulerError>;
