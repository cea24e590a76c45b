//! Scheduler module - SM-2 style review engine
//!
//! A single canonical algorithm parameterized by a [`ScheduleProfile`]
//! replaces the historical per-schedule code paths:
//! - Weighted-history smoothing of the submitted grade (one outlier grade
//!   cannot cause a large interval jump)
//! - Easiness-factor update with gentle adjustments
//! - Profile base-interval lookup, easiness scaling, cap, and jitter
//!
//! The engine is pure: it receives the recent history as an argument and
//! returns a new [`MasteryState`](crate::MasteryState); the caller persists
//! it and appends the review record inside one transaction.

mod engine;
mod profile;

pub use engine::{
    apply_review, effective_rating, interval_duration, AVERAGE_SMOOTHING, CURRENT_RATING_WEIGHT,
    HISTORY_WEIGHTS, INTERVAL_JITTER, MAX_RATING_JUMP, NEW_PROBLEM_RATING_CAP,
};
pub use profile::ScheduleProfile;
