//! Schedule profiles - the constants behind the algorithm
//!
//! A profile maps each rounded grade to a base interval, caps the maximum
//! interval, and bounds the easiness factor. Profiles change constants
//! only, never the algorithm, and are selected by external configuration
//! at startup.

use serde::{Deserialize, Serialize};

/// Named set of scheduling constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleProfile {
    /// Profile name used for configuration lookup
    pub name: String,
    /// Base interval in hours per rounded effective rating (index 0-5)
    pub base_intervals: [f64; 6],
    /// Hard cap on any computed interval, in hours
    pub max_interval_hours: f64,
    /// Lower bound for the easiness factor
    pub min_easiness: f64,
    /// Upper bound for the easiness factor
    pub max_easiness: f64,
}

impl ScheduleProfile {
    /// The canonical schedule, tuned for two practice sessions per day
    /// (morning and midday): failures come back within the same day,
    /// fluent problems stretch to four days, nothing exceeds ten days.
    pub fn two_sessions_daily() -> Self {
        Self {
            name: "two_sessions_daily".to_string(),
            base_intervals: [4.0, 6.0, 12.0, 24.0, 48.0, 96.0],
            max_interval_hours: 240.0,
            min_easiness: 1.3,
            max_easiness: 2.5,
        }
    }

    /// High-frequency schedule: everything comes back sooner and the cap
    /// sits at five days. Suited to interview-crunch periods.
    pub fn aggressive() -> Self {
        Self {
            name: "aggressive".to_string(),
            base_intervals: [1.0, 2.0, 6.0, 12.0, 24.0, 48.0],
            max_interval_hours: 120.0,
            min_easiness: 1.3,
            max_easiness: 2.5,
        }
    }

    /// Low-frequency schedule for maintenance practice, capped at 20 days.
    pub fn relaxed() -> Self {
        Self {
            name: "relaxed".to_string(),
            base_intervals: [8.0, 12.0, 24.0, 48.0, 96.0, 192.0],
            max_interval_hours: 480.0,
            min_easiness: 1.3,
            max_easiness: 2.5,
        }
    }

    /// Look up a named profile
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "two_sessions_daily" => Some(Self::two_sessions_daily()),
            "aggressive" => Some(Self::aggressive()),
            "relaxed" => Some(Self::relaxed()),
            _ => None,
        }
    }

    /// Clamp an easiness factor into this profile's range
    pub fn clamp_easiness(&self, easiness: f64) -> f64 {
        easiness.clamp(self.min_easiness, self.max_easiness)
    }

    /// Base interval for an effective rating, rounded to the nearest grade
    pub fn base_interval(&self, effective_rating: f64) -> f64 {
        let index = (effective_rating.round() as usize).min(5);
        self.base_intervals[index]
    }
}

impl Default for ScheduleProfile {
    fn default() -> Self {
        Self::two_sessions_daily()
    }
}
