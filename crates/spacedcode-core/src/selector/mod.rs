//! Problem selector - which problem to present next
//!
//! Two modes over the same snapshot of `(Problem, Option<MasteryState>)`:
//!
//! - **Single-pick** (`pick_next`): score every candidate, jitter, take the
//!   maximum. Used by time-based sessions with dynamic loading.
//! - **Batch** (`pick_batch`): legacy fixed-size sessions; reserves slots
//!   for new problems and mixes categories by priority.
//!
//! The score bands are deliberately non-overlapping so a single linear
//! ordering encodes "overdue-and-recently-failed > plain overdue >
//! brand-new > reinforcement", while the intra-band jitter keeps repeated
//! calls from producing an identical queue for problems of equal standing.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::problem::{MasteryState, Problem};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Baseline score for a never-reviewed problem
pub const NEW_PROBLEM_SCORE: f64 = 100.0;

/// Floor of the overdue band
pub const OVERDUE_BASE_SCORE: f64 = 200.0;

/// Overdue bonus grows 10 points per hour up to this cap
pub const OVERDUE_BONUS_CAP: f64 = 500.0;

/// Extra priority for due problems whose last grade was a struggle
pub const STRUGGLE_BOOST: f64 = 300.0;

/// Half-width of the uniform jitter added to every candidate score
pub const SCORE_JITTER: i32 = 20;

/// Reinforcement candidates must have been reviewed this recently
pub const REINFORCEMENT_WINDOW_HOURS: i64 = 24;

/// Reinforcement candidates must average below this grade
pub const REINFORCEMENT_AVERAGE_THRESHOLD: f64 = 3.5;

// ============================================================================
// SCORING
// ============================================================================

/// Score one problem for single-pick selection, or `None` when the problem
/// is not a candidate this round.
fn candidate_score(
    problem: &Problem,
    state: Option<&MasteryState>,
    now: DateTime<Utc>,
) -> Option<f64> {
    if !problem.is_active {
        return None;
    }

    let Some(state) = state else {
        // Never reviewed - high priority but not overwhelming
        return Some(NEW_PROBLEM_SCORE);
    };

    if state.is_due(now) {
        let overdue_hours = (now - state.next_review).num_seconds() as f64 / 3600.0;
        let mut score = OVERDUE_BASE_SCORE + (overdue_hours * 10.0).min(OVERDUE_BONUS_CAP);
        if state.last_rating.is_some_and(|r| r.is_failing()) {
            score += STRUGGLE_BOOST;
        }
        return Some(score);
    }

    // Not due yet: surface only recently-reviewed problems the user is
    // still struggling with
    let recently_reviewed = state
        .last_reviewed
        .is_some_and(|at| now - at < Duration::hours(REINFORCEMENT_WINDOW_HOURS));
    match state.average_rating {
        Some(average) if recently_reviewed && average < REINFORCEMENT_AVERAGE_THRESHOLD => {
            Some(50.0 - average * 10.0)
        }
        _ => None,
    }
}

// ============================================================================
// SINGLE-PICK MODE
// ============================================================================

/// Pick the next problem to present, or `None` when nothing qualifies.
pub fn pick_next(
    snapshot: &[(Problem, Option<MasteryState>)],
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Option<i64> {
    pick_next_excluding(snapshot, &HashSet::new(), now, rng)
}

/// Like [`pick_next`], skipping problems already presented in the current
/// session (the skip path feeds every reviewed-or-skipped id back here).
pub fn pick_next_excluding(
    snapshot: &[(Problem, Option<MasteryState>)],
    seen: &HashSet<i64>,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Option<i64> {
    let mut best: Option<(i64, f64)> = None;
    let mut candidates = 0usize;

    for (problem, state) in snapshot {
        if seen.contains(&problem.id) {
            continue;
        }
        let Some(score) = candidate_score(problem, state.as_ref(), now) else {
            continue;
        };
        candidates += 1;
        let jittered = score + f64::from(rng.gen_range(-SCORE_JITTER..=SCORE_JITTER));
        if best.is_none_or(|(_, top)| jittered > top) {
            best = Some((problem.id, jittered));
        }
    }

    debug!(candidates, picked = ?best, "selected next problem");
    best.map(|(id, _)| id)
}

// ============================================================================
// BATCH MODE
// ============================================================================

/// Pick an ordered batch of problems for a legacy fixed-size session.
///
/// At least one slot (25% of `size`, rounded down, minimum one) is reserved
/// for new problems whenever any exist. Returning fewer than `size`
/// problems is not an error - it just means the backlog is short.
pub fn pick_batch(
    snapshot: &[(Problem, Option<MasteryState>)],
    size: usize,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Vec<i64> {
    if size == 0 {
        return vec![];
    }

    let mut new_problems: Vec<i64> = vec![];
    let mut failed_recent: Vec<i64> = vec![];
    // (id, next_review) and (id, average) so each bucket can sort itself
    let mut overdue: Vec<(i64, DateTime<Utc>)> = vec![];
    let mut reinforcement: Vec<(i64, f64)> = vec![];

    for (problem, state) in snapshot {
        if !problem.is_active {
            continue;
        }
        match state {
            None => new_problems.push(problem.id),
            Some(state) if state.is_due(now) => {
                if state.last_rating.is_some_and(|r| r.is_failing()) {
                    failed_recent.push(problem.id);
                } else {
                    overdue.push((problem.id, state.next_review));
                }
            }
            Some(state) => {
                let recently_reviewed = state
                    .last_reviewed
                    .is_some_and(|at| now - at < Duration::hours(REINFORCEMENT_WINDOW_HOURS));
                if let Some(average) = state.average_rating {
                    if recently_reviewed && average < REINFORCEMENT_AVERAGE_THRESHOLD {
                        reinforcement.push((problem.id, average));
                    }
                }
            }
        }
    }

    let new_slots = if new_problems.is_empty() {
        0
    } else {
        (size / 4).max(1)
    };
    let review_slots = size - new_slots;

    let mut selected: Vec<i64> = vec![];

    // 1. Recent struggles first
    selected.extend(failed_recent.into_iter().take(review_slots));

    // 2. Overdue problems, most overdue first
    overdue.sort_by_key(|(_, next_review)| *next_review);
    let remaining_review = review_slots - selected.len().min(review_slots);
    selected.extend(overdue.into_iter().take(remaining_review).map(|(id, _)| id));

    // 3. New problems, randomly chosen
    new_problems.shuffle(rng);
    selected.extend(new_problems.into_iter().take(new_slots));

    // 4. Fill any leftover slots with reinforcement, weakest average first
    if selected.len() < size {
        reinforcement.sort_by(|a, b| a.1.total_cmp(&b.1));
        let leftover = size - selected.len();
        selected.extend(reinforcement.into_iter().take(leftover).map(|(id, _)| id));
    }

    // Shuffle so the categories are interleaved for variety
    selected.shuffle(rng);
    debug!(size, selected = selected.len(), "built session batch");
    selected
}

// ============================================================================
// TESTS
// ============================================================================
