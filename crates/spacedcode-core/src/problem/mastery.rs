//! Mastery state and the review log
//!
//! One `MasteryState` per problem tracks the SM-2 style scheduling
//! parameters; absence means "never reviewed". Every submitted review is
//! appended to the immutable log as a `ReviewRecord`, which in turn feeds
//! the weighted-history smoothing on the next review of the same problem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SchedulerError};

// ============================================================================
// RATING
// ============================================================================

/// Problem-solving stages used as review grades (0-5)
///
/// The names mirror how far the user got before giving up:
///
/// | Grade | Stage    | Meaning                                     |
/// |-------|----------|---------------------------------------------|
/// | 0     | Failed   | Could not make progress at all              |
/// | 1     | Solution | Needed to read the full solution            |
/// | 2     | Errors   | Solved with significant errors              |
/// | 3     | Debug    | Solved after notable debugging              |
/// | 4     | Solved   | Solved cleanly                              |
/// | 5     | Fluent   | Solved immediately, no hesitation           |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Could not make progress at all
    Failed,
    /// Needed to read the full solution
    Solution,
    /// Solved with significant errors
    Errors,
    /// Solved after notable debugging
    Debug,
    /// Solved cleanly
    Solved,
    /// Solved immediately, no hesitation
    Fluent,
}

impl Rating {
    /// Numeric grade in 0..=5
    pub fn value(&self) -> u8 {
        match self {
            Rating::Failed => 0,
            Rating::Solution => 1,
            Rating::Errors => 2,
            Rating::Debug => 3,
            Rating::Solved => 4,
            Rating::Fluent => 5,
        }
    }

    /// Parse a numeric grade, rejecting anything outside 0..=5
    pub fn from_value(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Rating::Failed),
            1 => Ok(Rating::Solution),
            2 => Ok(Rating::Errors),
            3 => Ok(Rating::Debug),
            4 => Ok(Rating::Solved),
            5 => Ok(Rating::Fluent),
            other => Err(SchedulerError::InvalidRating(other)),
        }
    }

    /// Grades 0-2 count as a recent struggle for selection purposes
    pub fn is_failing(&self) -> bool {
        self.value() <= 2
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ============================================================================
// REVIEW OUTCOME
// ============================================================================

/// What happened when a problem was presented
///
/// A skip still occupies a session slot and consumes time budget, but it
/// never reaches the stats engine (the original schema stores it as a -1
/// sentinel in the rating column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewOutcome {
    /// The user graded the problem
    Rated(Rating),
    /// The user skipped the problem without grading it
    Skipped,
}

impl ReviewOutcome {
    /// The grade, when the problem was actually rated
    pub fn grade(&self) -> Option<Rating> {
        match self {
            ReviewOutcome::Rated(rating) => Some(*rating),
            ReviewOutcome::Skipped => None,
        }
    }

    /// Whether the problem was skipped
    pub fn is_skip(&self) -> bool {
        matches!(self, ReviewOutcome::Skipped)
    }
}

// ============================================================================
// MASTERY STATE
// ============================================================================

/// Per-problem scheduling state, created on first review
///
/// Invariant: `next_review == last_reviewed + interval_hours` whenever
/// `last_reviewed` is set. Only the stats engine mutates this; it is never
/// deleted while the problem exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryState {
    /// SM-2 easiness factor, clamped to the active profile's range
    pub easiness_factor: f64,
    /// Hours until the problem is next due
    pub interval_hours: f64,
    /// Consecutive-success counter (decays on failure, never negative)
    pub repetitions: u32,
    /// When the problem becomes due again
    pub next_review: DateTime<Utc>,
    /// Grade from the most recent rated review
    pub last_rating: Option<Rating>,
    /// Lifetime count of rated reviews
    pub total_reviews: u32,
    /// Exponential moving average of raw grades (None until first review)
    pub average_rating: Option<f64>,
    /// When the problem was last rated
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Default for MasteryState {
    fn default() -> Self {
        Self {
            easiness_factor: 2.5,
            interval_hours: 1.0,
            repetitions: 0,
            next_review: Utc::now(),
            last_rating: None,
            total_reviews: 0,
            average_rating: None,
            last_reviewed: None,
        }
    }
}

impl MasteryState {
    /// Check if the problem is due for review at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}

// ============================================================================
// REVIEW LOG
// ============================================================================

/// Append-only log entry for one presented problem
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Problem that was presented
    pub problem_id: i64,
    /// Grade or skip
    pub outcome: ReviewOutcome,
    /// Seconds the user spent on the problem
    pub time_spent_seconds: u32,
    /// Session the review was attributed to
    pub session_id: Option<Uuid>,
    /// When the review happened
    pub reviewed_at: DateTime<Utc>,
}

/// Input for submitting a review
///
/// Uses `deny_unknown_fields` to prevent field injection attacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReviewSubmission {
    /// Problem being reviewed
    pub problem_id: i64,
    /// Grade or skip
    pub outcome: ReviewOutcome,
    /// Seconds spent, reported by the client timer
    #[serde(default)]
    pub time_spent_seconds: u32,
}

// ============================================================================
// TESTS
// ============================================================================
