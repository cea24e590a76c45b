//! Practice problems - the catalog entries being scheduled
//!
//! Problems are owned by the external catalog; the scheduling core only
//! reads `id`, `difficulty`, and `is_active`. The descriptive fields are
//! carried so snapshots can round-trip to the display layer unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// DIFFICULTY
// ============================================================================

/// Problem difficulty tiers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy tier
    Easy,
    /// Medium tier
    Medium,
    /// Hard tier
    Hard,
    /// Difficulty not known (e.g. imported without metadata)
    #[default]
    Unknown,
}

impl Difficulty {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }

    /// Parse from string name. Unrecognized names map to `Unknown`.
    pub fn parse_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// URL HELPERS
// ============================================================================

/// Normalize a problem URL: strip query parameters, fragments, and the
/// trailing slash so the same problem added twice compares equal.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/');
    trimmed.to_string()
}

/// Extract the problem slug from a judge URL like
/// `https://leetcode.com/problems/two-sum/`.
pub fn extract_slug(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/problems/")?;
    let slug = rest.split('/').next().unwrap_or(rest);
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Extract a numeric problem id from slugs of the form `123-two-sum`.
fn extract_number(url: &str) -> Option<i64> {
    let slug = extract_slug(url)?;
    let (digits, _) = slug.split_once('-')?;
    digits.parse().ok()
}

// ============================================================================
// PROBLEM
// ============================================================================

/// A practice problem in the catalog
///
/// Soft-deleted problems (`is_active == false`) are excluded from every
/// scheduling decision but keep their mastery state and review history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Catalog row id
    pub id: i64,
    /// Canonical (normalized) problem URL
    pub url: String,
    /// Problem slug extracted from the URL
    pub slug: Option<String>,
    /// Problem number on the judge, when encoded in the URL
    pub number: Option<i64>,
    /// Display title
    pub title: Option<String>,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form user notes
    pub notes: Option<String>,
    /// When the problem was added to the catalog
    pub created_at: DateTime<Utc>,
    /// Soft-delete flag
    pub is_active: bool,
}

impl Problem {
    /// Create a new active problem from a raw URL, deriving slug and number
    pub fn new(id: i64, url: impl Into<String>) -> Self {
        let url = normalize_url(&url.into());
        Self {
            id,
            slug: extract_slug(&url),
            number: extract_number(&url),
            url,
            title: None,
            difficulty: Difficulty::Unknown,
            tags: vec![],
            notes: None,
            created_at: Utc::now(),
            is_active: true,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
