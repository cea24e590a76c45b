//! Journey: a full timed practice session
//!
//! Start a session, work through selected problems (rating and skipping),
//! pause and resume, run the budget out, and confirm the terminal rules.

use chrono::Duration;
use spacedcode_e2e_tests::fixtures::PracticeHarness;
use spacedcode_core::{
    study_stats, Difficulty, Rating, SchedulerError, SessionStatus,
};

#[test]
fn full_session_until_budget_expires() {
    let mut harness = PracticeHarness::new(5); // 300 second budget
    for id in 1..=6 {
        harness.add_problem(id, Difficulty::Medium);
    }

    // Work through problems 100 seconds at a time; expiry must trip on
    // the review that crosses 300
    let mut reviews = 0;
    while !harness.session.is_expired() {
        let id = harness.next_problem().expect("catalog is not empty");
        harness.rate(id, Rating::Debug, 100).unwrap();
        reviews += 1;
    }

    assert_eq!(reviews, 3);
    assert_eq!(harness.session.total_time_seconds, 300);
    assert_eq!(harness.session.problems_reviewed, 3);

    // The caller completes an expired session
    harness.session.complete().unwrap();
    assert_eq!(harness.session.status, SessionStatus::Completed);

    // Terminal: nothing else may be attributed to it
    assert!(matches!(
        harness.session.record_review(10),
        Err(SchedulerError::InvalidTransition { .. })
    ));
    assert!(harness.session.duration_minutes().is_some());
}

#[test]
fn skips_consume_budget_but_not_mastery() {
    let mut harness = PracticeHarness::new(45);
    harness.add_problem(1, Difficulty::Easy);
    harness.add_problem(2, Difficulty::Hard);

    let first = harness.next_problem().unwrap();
    harness.skip(first, 30).unwrap();

    // The skip took a slot and time, but created no mastery state
    assert_eq!(harness.session.problems_reviewed, 1);
    assert_eq!(harness.session.total_time_seconds, 30);
    assert!(!harness.states.contains_key(&first));

    // And the same problem is not offered again this session
    let second = harness.next_problem().unwrap();
    assert_ne!(second, first);
}

#[test]
fn pause_blocks_reviews_and_preserves_budget() {
    let mut harness = PracticeHarness::new(45);
    harness.add_problem(1, Difficulty::Medium);

    harness.rate(1, Rating::Solved, 120).unwrap();
    harness.session.pause().unwrap();

    // Double pause rejected, state unchanged
    assert!(matches!(
        harness.session.pause(),
        Err(SchedulerError::InvalidTransition {
            from: SessionStatus::Paused,
            ..
        })
    ));
    assert!(harness.rate(1, Rating::Solved, 60).is_err());

    // A long wall-clock pause adds nothing to the reported total
    harness.advance(Duration::hours(2));
    harness.session.resume().unwrap();
    assert_eq!(harness.session.total_time_seconds, 120);
    assert!(!harness.session.is_expired());
}

#[test]
fn abandoned_session_is_terminal() {
    let mut harness = PracticeHarness::new(45);
    harness.add_problem(1, Difficulty::Medium);
    harness.rate(1, Rating::Errors, 60).unwrap();

    harness.session.abandon().unwrap();
    assert_eq!(harness.session.status, SessionStatus::Abandoned);
    assert!(harness.session.completed_at.is_some());
    assert!(harness.session.resume().is_err());
    assert!(harness.session.complete().is_err());

    // The review that happened before abandoning still counts in stats
    let stats = study_stats(&harness.snapshot(), harness.now);
    assert_eq!(stats.total_reviews, 1);
}

#[test]
fn empty_catalog_is_nothing_due_not_an_error() {
    let mut harness = PracticeHarness::new(45);
    assert_eq!(harness.next_problem(), None);

    let stats = study_stats(&harness.snapshot(), harness.now);
    assert_eq!(stats.total_problems, 0);
    assert_eq!(stats.average_rating, None);
}
