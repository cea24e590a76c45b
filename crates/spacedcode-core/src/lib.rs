//! # SpacedCode Core
//!
//! Scheduling core for practicing a personal backlog of programming
//! problems with spaced repetition:
//!
//! - **Review engine**: SM-2 style mastery update with weighted-history
//!   smoothing, so one outlier grade cannot cause a large interval jump
//! - **Problem selector**: scores new, overdue, recently-failed, and
//!   reinforcement candidates to pick what to practice next
//! - **Session clock**: pause/resume lifecycle with an explicit-report
//!   time budget
//! - **Study stats**: read-only rollup for dashboards
//!
//! The core operates on in-memory snapshots supplied by the caller and
//! returns updated values; it owns no storage, spawns no threads, and
//! performs no I/O. Randomness (interval jitter, selection tie-breaking)
//! is injected through [`rand::Rng`] so tests can seed it.
//!
//! ## Quick Start
//!
//! ```rust
//! use spacedcode_core::{apply_review, Rating, ScheduleProfile, Session};
//! use chrono::Utc;
//!
//! # fn main() -> spacedcode_core::Result<()> {
//! let profile = ScheduleProfile::two_sessions_daily();
//! let mut session = Session::start(45)?;
//! let mut rng = rand::thread_rng();
//!
//! // First review of a problem: no history, no prior state
//! let now = Utc::now();
//! let state = apply_review(Rating::Solved, &[], None, &profile, now, &mut rng);
//! session.record_review(240)?;
//!
//! assert!(state.next_review > now);
//! assert!(!session.is_expired());
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod error;
pub mod problem;
pub mod scheduler;
pub mod selector;
pub mod session;
pub mod stats;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Problem and mastery types
pub use problem::{
    extract_slug, normalize_url, Difficulty, MasteryState, Problem, Rating, ReviewOutcome,
    ReviewRecord, ReviewSubmission,
};

// Review engine
pub use scheduler::{
    apply_review, effective_rating, interval_duration, ScheduleProfile, AVERAGE_SMOOTHING,
    HISTORY_WEIGHTS, INTERVAL_JITTER, MAX_RATING_JUMP, NEW_PROBLEM_RATING_CAP,
};

// Selection
pub use selector::{pick_batch, pick_next, pick_next_excluding};

// Session lifecycle
pub use session::{Session, SessionStatus, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};

// Study statistics
pub use stats::{study_stats, StudyStats};

// Errors
pub use error::{Result, SchedulerError};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        apply_review, pick_batch, pick_next, study_stats, Difficulty, MasteryState, Problem,
        Rating, Result, ReviewOutcome, ReviewRecord, ReviewSubmission, ScheduleProfile,
        SchedulerError, Session, SessionStatus, StudyStats,
    };
}
