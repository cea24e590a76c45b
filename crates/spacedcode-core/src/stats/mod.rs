//! Study statistics - read-side rollup for dashboards
//!
//! A pure fold over the `(Problem, Option<MasteryState>)` snapshot.
//! Nothing here mutates state, so calling it twice on the same snapshot
//! yields identical output.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::problem::{Difficulty, MasteryState, Problem};

/// Interval threshold (hours) above which a well-rated problem counts as
/// mastered
pub const MASTERY_INTERVAL_HOURS: f64 = 24.0;

/// Average-rating threshold for mastery
pub const MASTERY_AVERAGE_RATING: f64 = 4.0;

/// Aggregated study statistics over all active problems
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    /// Active problems in the catalog
    pub total_problems: u32,
    /// Due right now (includes never-reviewed problems)
    pub due_now: u32,
    /// Due within the next 24 hours (and not already due)
    pub due_today: u32,
    /// Due within the next 7 days (and not sooner)
    pub due_this_week: u32,
    /// Active problems per difficulty tier
    pub by_difficulty: BTreeMap<Difficulty, u32>,
    /// Rated problems per most-recent grade (index = grade)
    pub by_rating: [u32; 6],
    /// Lifetime rated reviews across all problems
    pub total_reviews: u64,
    /// Problems with average grade >= 4 and interval beyond a day
    pub problems_mastered: u32,
    /// Mean of per-problem average grades, over rated problems only
    pub average_rating: Option<f64>,
}

/// Fold a snapshot into dashboard statistics.
pub fn study_stats(snapshot: &[(Problem, Option<MasteryState>)], now: DateTime<Utc>) -> StudyStats {
    let mut stats = StudyStats::default();
    let mut rating_sum = 0.0;
    let mut rated_problems = 0u32;

    for (problem, state) in snapshot {
        if !problem.is_active {
            continue;
        }
        stats.total_problems += 1;
        *stats.by_difficulty.entry(problem.difficulty).or_insert(0) += 1;

        let Some(state) = state else {
            // Never reviewed: due immediately
            stats.due_now += 1;
            continue;
        };

        if state.next_review <= now {
            stats.due_now += 1;
        } else if state.next_review <= now + Duration::hours(24) {
            stats.due_today += 1;
        } else if state.next_review <= now + Duration::days(7) {
            stats.due_this_week += 1;
        }

        if let Some(last_rating) = state.last_rating {
            stats.by_rating[usize::from(last_rating.value())] += 1;
            // Fall back to the last grade for problems reviewed before
            // the moving average existed
            rating_sum += state
                .average_rating
                .unwrap_or_else(|| f64::from(last_rating.value()));
            rated_problems += 1;
        }

        stats.total_reviews += u64::from(state.total_reviews);

        if state.average_rating.is_some_and(|avg| avg >= MASTERY_AVERAGE_RATING)
            && state.interval_hours > MASTERY_INTERVAL_HOURS
        {
            stats.problems_mastered += 1;
        }
    }

    if rated_problems > 0 {
        stats.average_rating = Some(rating_sum / f64::from(rated_problems));
    }
    stats
}

// ============================================================================
// TESTS
// ============================================================================
