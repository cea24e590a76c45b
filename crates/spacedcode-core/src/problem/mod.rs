//! Problem module - Core types and data structures
//!
//! The practice catalog's view of the world:
//! - Problems with difficulty, tags, and a soft-delete flag
//! - Per-problem mastery state (SM-2 style scheduling parameters)
//! - The append-only review log and the review submission input

mod item;
mod mastery;

pub use item::{extract_slug, normalize_url, Difficulty, Problem};
pub use mastery::{MasteryState, Rating, ReviewOutcome, ReviewRecord, ReviewSubmission};
