//! Journey: mastery progression over many simulated days
//!
//! Drives the engine + selector through multi-day schedules and checks the
//! macro behavior: intervals grow under success, shrink after struggles,
//! the cap holds, and the selector ranks struggling problems first.

use chrono::Duration;
use spacedcode_e2e_tests::fixtures::PracticeHarness;
use spacedcode_core::{
    pick_batch, scheduler::interval_duration, Difficulty, Rating, ScheduleProfile,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn consistent_success_grows_intervals_to_the_cap() {
    let mut harness = PracticeHarness::new(300);
    harness.add_problem(1, Difficulty::Medium);

    let mut previous_interval = 0.0;
    for round in 0..12 {
        harness.rate(1, Rating::Fluent, 60).unwrap();
        let state = harness.states[&1].clone();

        // The published bounds hold on every step
        assert!(state.interval_hours > 0.0);
        assert!(state.interval_hours <= harness.profile.max_interval_hours);
        assert!(state.easiness_factor <= harness.profile.max_easiness);
        assert_eq!(
            state.next_review,
            state.last_reviewed.unwrap() + interval_duration(state.interval_hours)
        );

        // Jump limiting keeps early intervals modest; by the later rounds
        // the schedule should be growing or pinned near the cap
        if round >= 6 {
            assert!(state.interval_hours >= previous_interval * 0.9);
        }
        previous_interval = state.interval_hours;

        // Practice again exactly when the problem comes due
        harness.advance(Duration::milliseconds(
            interval_duration(state.interval_hours).num_milliseconds(),
        ));
    }

    // After a dozen fluent reviews the schedule approaches the 240h cap
    let final_state = &harness.states[&1];
    assert!(final_state.interval_hours > 96.0);
    assert_eq!(final_state.repetitions, 12);
    assert_eq!(final_state.total_reviews, 12);
}

#[test]
fn a_failure_pulls_the_problem_back_without_hard_reset() {
    let mut harness = PracticeHarness::new(300);
    harness.add_problem(1, Difficulty::Hard);

    for _ in 0..4 {
        harness.rate(1, Rating::Solved, 60).unwrap();
        let interval = harness.states[&1].interval_hours;
        harness.advance(Duration::milliseconds(
            interval_duration(interval).num_milliseconds(),
        ));
    }
    let before = harness.states[&1].clone();
    assert!(before.repetitions >= 4);
    assert!(before.interval_hours > 24.0);

    harness.rate(1, Rating::Failed, 300).unwrap();
    let after = harness.states[&1].clone();

    // Short interval again, repetitions decay by one rather than reset.
    // The weighted history keeps the effective rating near 3, so the
    // schedule falls back to the grade-3 base rather than the floor.
    assert!(after.interval_hours < before.interval_hours);
    assert!(after.interval_hours <= 24.0 * 1.05);
    assert_eq!(after.repetitions, before.repetitions - 1);
    // The moving average drops but remembers the successful streak
    assert!(after.average_rating.unwrap() > 0.0);
    assert!(after.average_rating.unwrap() < before.average_rating.unwrap());
}

#[test]
fn selector_always_prefers_the_struggled_overdue_problem() {
    // One new problem vs one 48h-overdue problem last rated 1: the overdue
    // band floor (200 + 480 + 300) beats the new-item ceiling (100 + 20)
    // regardless of jitter
    let mut harness = PracticeHarness::new(300);
    harness.add_problem(1, Difficulty::Easy);
    harness.add_problem(2, Difficulty::Hard);

    harness.rate(2, Rating::Solution, 120).unwrap();
    let due_in = harness.states[&2].interval_hours;
    harness.advance(Duration::milliseconds(
        interval_duration(due_in).num_milliseconds(),
    ));
    harness.advance(Duration::hours(48));

    for _ in 0..50 {
        let snapshot = harness.snapshot();
        let picked = spacedcode_core::pick_next(&snapshot, harness.now, &mut harness.rng);
        assert_eq!(picked, Some(2));
    }
}

#[test]
fn batch_mode_mixes_categories_for_a_fixed_session() {
    let mut harness = PracticeHarness::new(300);
    // Ten reviewed problems, all overdue after the jump...
    for id in 1..=10 {
        harness.add_problem(id, Difficulty::Medium);
        harness.rate(id, Rating::Solved, 60).unwrap();
    }
    // ...plus four never-reviewed ones
    for id in 11..=14 {
        harness.add_problem(id, Difficulty::Medium);
    }
    harness.advance(Duration::days(10));

    let mut rng = SmallRng::seed_from_u64(99);
    let batch = pick_batch(&harness.snapshot(), 8, harness.now, &mut rng);

    assert_eq!(batch.len(), 8);
    // 25% of the batch is reserved for new problems
    let new_count = batch.iter().filter(|id| **id > 10).count();
    assert_eq!(new_count, 2);
    // No duplicates
    let mut unique = batch.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), batch.len());
}

#[test]
fn profiles_change_constants_not_behavior() {
    let now = chrono::Utc::now();
    let mut rng = SmallRng::seed_from_u64(5);

    for profile in [
        ScheduleProfile::two_sessions_daily(),
        ScheduleProfile::aggressive(),
        ScheduleProfile::relaxed(),
    ] {
        // First review is capped at the grade-3 base interval of the
        // active profile, whichever profile that is
        let state =
            spacedcode_core::apply_review(Rating::Fluent, &[], None, &profile, now, &mut rng);
        let base = profile.base_intervals[3];
        assert!(state.interval_hours >= base * 0.95);
        assert!(state.interval_hours <= base * 1.05);
        assert!(state.interval_hours <= profile.max_interval_hours);
    }
}
