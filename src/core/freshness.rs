use chrono::{DateTime, Duration, Utc};
use crate::models::LocationFix;

/// How current a location fix is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixFreshness {
    Fresh { age_minutes: i64 },
    Stale { age_minutes: i64 },
    /// The source did not report when the fix was taken
    Unknown,
}

impl FixFreshness {
    pub fn is_stale(&self) -> bool {
        matches!(self, FixFreshness::Stale { .. })
    }

    pub fn age_minutes(&self) -> Option<i64> {
        match self {
            FixFreshness::Fresh { age_minutes } | FixFreshness::Stale { age_minutes } => {
                Some(*age_minutes)
            }
            FixFreshness::Unknown => None,
        }
    }
}

/// Age of a fix taken at `timestamp`. Timestamps in the future count as zero.
pub fn fix_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - timestamp).max(Duration::zero())
}

/// Classify a fix against `max_age`
///
/// Age is reported in whole minutes, rounded to nearest.
pub fn classify_fix(fix: &LocationFix, now: DateTime<Utc>, max_age: Duration) -> FixFreshness {
    let Some(timestamp) = fix.timestamp else {
        return FixFreshness::Unknown;
    };

    let age = fix_age(timestamp, now);
    let age_minutes = (age.num_milliseconds() as f64 / 60_000.0).round() as i64;

    if age > max_age {
        FixFreshness::Stale { age_minutes }
    } else {
        FixFreshness::Fresh { age_minutes }
    }
}
