//! Practice session lifecycle
//!
//! A session is a small state machine with a time budget:
//!
//! | From    | pause | resume | record_review | complete | abandon |
//! |---------|-------|--------|---------------|----------|---------|
//! | Active  | ok    | err    | ok            | ok       | ok      |
//! | Paused  | err   | ok     | err           | ok       | ok      |
//! | Completed / Abandoned: every transition is rejected               |
//!
//! Time is accounted from explicit per-review reports, never from the wall
//! clock, so pausing simply stops further reports from being solicited.
//! `is_expired` is evaluated after every recorded review and on
//! resume/practice-page entry by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, SchedulerError};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Shortest allowed session budget, in minutes
pub const MIN_SESSION_MINUTES: u32 = 5;

/// Longest allowed session budget, in minutes
pub const MAX_SESSION_MINUTES: u32 = 300;

// ============================================================================
// STATUS
// ============================================================================

/// Lifecycle status of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Reviews are being solicited and recorded
    #[default]
    Active,
    /// Temporarily suspended; no reviews may be recorded
    Paused,
    /// Finished normally (terminal)
    Completed,
    /// Ended without finishing (terminal)
    Abandoned,
}

impl SessionStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Abandoned)
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Paused => "paused",
            SessionStatus::Completed => "completed",
            SessionStatus::Abandoned => "abandoned",
        }
    }

    /// Parse from string name
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(SessionStatus::Active),
            "paused" => Some(SessionStatus::Paused),
            "completed" => Some(SessionStatus::Completed),
            "abandoned" => Some(SessionStatus::Abandoned),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// A timed practice session
///
/// `total_time_seconds` accumulates only the explicitly reported
/// `time_spent_seconds` of each review; it is not derived from wall-clock
/// deltas, so paused intervals never count against the budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier (UUID v4)
    pub id: Uuid,
    /// When the session was started
    pub started_at: DateTime<Utc>,
    /// When the session was paused, while paused
    pub paused_at: Option<DateTime<Utc>>,
    /// When the session reached a terminal state
    pub completed_at: Option<DateTime<Utc>>,
    /// Current lifecycle status
    pub status: SessionStatus,
    /// Problems presented so far (rated or skipped)
    pub problems_reviewed: u32,
    /// Accumulated reported time, in seconds
    pub total_time_seconds: u64,
    /// Configured budget, fixed at creation
    pub max_duration_minutes: u32,
}

impl Session {
    /// Start a new active session with the given budget.
    ///
    /// The budget must be within [`MIN_SESSION_MINUTES`]..=[`MAX_SESSION_MINUTES`];
    /// anything else is a validation error, never silently clamped.
    pub fn start(max_duration_minutes: u32) -> Result<Self> {
        Self::start_at(max_duration_minutes, Utc::now())
    }

    /// [`Session::start`] with an explicit clock, for deterministic tests
    pub fn start_at(max_duration_minutes: u32, now: DateTime<Utc>) -> Result<Self> {
        if !(MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&max_duration_minutes) {
            return Err(SchedulerError::InvalidDuration(max_duration_minutes));
        }
        let session = Self {
            id: Uuid::new_v4(),
            started_at: now,
            paused_at: None,
            completed_at: None,
            status: SessionStatus::Active,
            problems_reviewed: 0,
            total_time_seconds: 0,
            max_duration_minutes,
        };
        info!(id = %session.id, max_duration_minutes, "session started");
        Ok(session)
    }

    /// Pause an active session
    pub fn pause(&mut self) -> Result<()> {
        self.pause_at(Utc::now())
    }

    /// [`Session::pause`] with an explicit clock
    pub fn pause_at(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.expect_status(SessionStatus::Active, "pause")?;
        self.status = SessionStatus::Paused;
        self.paused_at = Some(now);
        info!(id = %self.id, "session paused");
        Ok(())
    }

    /// Resume a paused session. Wall-clock time spent paused is never
    /// added to the budget.
    pub fn resume(&mut self) -> Result<()> {
        self.expect_status(SessionStatus::Paused, "resume")?;
        self.status = SessionStatus::Active;
        self.paused_at = None;
        info!(id = %self.id, "session resumed");
        Ok(())
    }

    /// Attribute one presented problem (rated or skipped) to this session
    pub fn record_review(&mut self, time_spent_seconds: u32) -> Result<()> {
        self.expect_status(SessionStatus::Active, "record a review in")?;
        self.total_time_seconds += u64::from(time_spent_seconds);
        self.problems_reviewed += 1;
        Ok(())
    }

    /// Complete an active or paused session (terminal)
    pub fn complete(&mut self) -> Result<()> {
        self.complete_at(Utc::now())
    }

    /// [`Session::complete`] with an explicit clock
    pub fn complete_at(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.status.is_terminal() {
            return Err(SchedulerError::InvalidTransition {
                from: self.status,
                action: "complete",
            });
        }
        self.status = SessionStatus::Completed;
        self.completed_at = Some(now);
        info!(id = %self.id, reviewed = self.problems_reviewed, "session completed");
        Ok(())
    }

    /// Abandon a session from any non-terminal state (terminal)
    pub fn abandon(&mut self) -> Result<()> {
        self.abandon_at(Utc::now())
    }

    /// [`Session::abandon`] with an explicit clock
    pub fn abandon_at(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.status.is_terminal() {
            return Err(SchedulerError::InvalidTransition {
                from: self.status,
                action: "abandon",
            });
        }
        self.status = SessionStatus::Abandoned;
        self.completed_at = Some(now);
        info!(id = %self.id, reviewed = self.problems_reviewed, "session abandoned");
        Ok(())
    }

    /// True iff the accumulated reported time has reached the budget
    pub fn is_expired(&self) -> bool {
        self.total_time_seconds >= u64::from(self.max_duration_minutes) * 60
    }

    /// Reported seconds left in the budget
    pub fn remaining_seconds(&self) -> u64 {
        (u64::from(self.max_duration_minutes) * 60).saturating_sub(self.total_time_seconds)
    }

    /// Wall-clock span in minutes, once the session is terminal
    pub fn duration_minutes(&self) -> Option<f64> {
        self.completed_at
            .map(|end| (end - self.started_at).num_seconds() as f64 / 60.0)
    }

    fn expect_status(&self, expected: SessionStatus, action: &'static str) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(SchedulerError::InvalidTransition {
                from: self.status,
                action,
            })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
