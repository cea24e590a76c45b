//! The review stats engine
//!
//! `apply_review` is the single mutation point for [`MasteryState`]:
//! rating in, new state out, no side effects. Randomness comes in through
//! a caller-supplied [`Rng`] so tests can seed it and assert exact
//! outcomes.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::problem::{MasteryState, Rating, ReviewRecord};
use crate::scheduler::ScheduleProfile;

// ============================================================================
// CONSTANTS
// ============================================================================

/// History weights, paired with the most-recent-first review log.
/// The most recent prior review carries 35% of the history signal.
pub const HISTORY_WEIGHTS: [f64; 5] = [0.35, 0.25, 0.20, 0.15, 0.05];

/// Weight of the grade being submitted right now
pub const CURRENT_RATING_WEIGHT: f64 = 0.35;

/// A single review can raise the effective rating at most this far above
/// the previous grade
pub const MAX_RATING_JUMP: f64 = 1.5;

/// Problems with no rating history cannot jump straight to "mastered"
pub const NEW_PROBLEM_RATING_CAP: f64 = 3.0;

/// Smoothing factor for the exponential moving average of raw grades
pub const AVERAGE_SMOOTHING: f64 = 0.3;

/// Half-width of the uniform jitter factor applied to every interval
pub const INTERVAL_JITTER: f64 = 0.05;

// ============================================================================
// EFFECTIVE RATING
// ============================================================================

/// Smooth the submitted grade against recent performance history.
///
/// `history` is the review log for this problem, most recent first, up to
/// five entries; skipped entries are ignored. With fewer than two graded
/// entries the grade is only jump-limited. With enough history the result
/// is a weighted average of history plus the current grade, renormalized
/// over the weights actually used, then jump-limited and clamped to [0, 5].
pub fn effective_rating(
    rating: Rating,
    history: &[ReviewRecord],
    last_rating: Option<Rating>,
) -> f64 {
    let raw = f64::from(rating.value());
    let graded: Vec<f64> = history
        .iter()
        .filter_map(|record| record.outcome.grade())
        .map(|grade| f64::from(grade.value()))
        .take(HISTORY_WEIGHTS.len())
        .collect();

    if graded.len() < 2 {
        // Not enough history to average - just constrain the jump
        return match last_rating {
            Some(last) => raw.min(f64::from(last.value()) + MAX_RATING_JUMP),
            None => raw.min(NEW_PROBLEM_RATING_CAP),
        };
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for (grade, weight) in graded.iter().zip(HISTORY_WEIGHTS) {
        weighted_sum += grade * weight;
        weight_total += weight;
    }
    weighted_sum += raw * CURRENT_RATING_WEIGHT;
    weight_total += CURRENT_RATING_WEIGHT;

    let mut effective = weighted_sum / weight_total;
    if let Some(last) = last_rating {
        effective = effective.min(f64::from(last.value()) + MAX_RATING_JUMP);
    }
    effective.clamp(0.0, 5.0)
}

// ============================================================================
// APPLY REVIEW
// ============================================================================

/// Apply a graded review and produce the updated mastery state.
///
/// The skip sentinel never reaches this function; `rating` is always a
/// genuine grade. `current` is `None` for a never-reviewed problem.
pub fn apply_review(
    rating: Rating,
    history: &[ReviewRecord],
    current: Option<&MasteryState>,
    profile: &ScheduleProfile,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> MasteryState {
    let current = current.cloned().unwrap_or_default();
    let effective = effective_rating(rating, history, current.last_rating);

    // Gentle easiness adjustment, clamped to the profile range
    let easiness =
        profile.clamp_easiness(current.easiness_factor + (0.05 - (5.0 - effective) * 0.03));

    // Base interval from the rounded effective rating; scale by easiness
    // only once the problem has a track record of success
    let mut interval = profile.base_interval(effective);
    if current.repetitions >= 2 && effective >= 3.0 {
        interval *= easiness;
    }
    interval = interval.min(profile.max_interval_hours);

    // Desynchronize due times so a batch of reviews does not all come due
    // at the same instant; the cap still holds afterwards
    interval *= 1.0 + rng.gen_range(-INTERVAL_JITTER..=INTERVAL_JITTER);
    interval = interval.min(profile.max_interval_hours);

    let repetitions = if effective >= 3.0 {
        current.repetitions + 1
    } else {
        current.repetitions.saturating_sub(1)
    };

    // The moving average tracks raw grades, not the smoothed rating
    let raw = f64::from(rating.value());
    let average_rating = match current.average_rating {
        Some(average) => AVERAGE_SMOOTHING * raw + (1.0 - AVERAGE_SMOOTHING) * average,
        None => raw,
    };

    debug!(
        rating = rating.value(),
        effective, easiness, interval, repetitions, "applied review"
    );

    MasteryState {
        easiness_factor: easiness,
        interval_hours: interval,
        repetitions,
        next_review: now + interval_duration(interval),
        last_rating: Some(rating),
        total_reviews: current.total_reviews + 1,
        average_rating: Some(average_rating),
        last_reviewed: Some(now),
    }
}

/// Convert a fractional hour interval into a `chrono` duration with
/// millisecond precision. `next_review` is always `last_reviewed` plus
/// exactly this duration.
pub fn interval_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

// ============================================================================
// TESTS
// ============================================================================
