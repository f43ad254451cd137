use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Closed bounds for one of the per-session clinical metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricRange {
    pub min: u8,
    pub max: u8,
}

impl MetricRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Synthetic 0–100 session quality/outcome scale, constrained to [20, 95].
pub const PERFORMANCE_RANGE: MetricRange = MetricRange { min: 20, max: 95 };

/// Self-report-style fatigue scale.
pub const FATIGUE_RANGE: MetricRange = MetricRange { min: 1, max: 10 };

/// Schedule-compliance percentage, constrained to [40, 100].
pub const ADHERENCE_RANGE: MetricRange = MetricRange { min: 40, max: 100 };

/// One completed unit of rehabilitation activity, as consumed by the
/// dashboard's progress charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionRecord {
    /// Instant the session took place. Unique and strictly increasing
    /// across a series.
    pub timestamp: jiff::Timestamp,
    /// 1-based ordinal, dense, equal to position in the series.
    pub session_number: u32,
    pub performance_score: u8,
    pub fatigue_level: u8,
    pub adherence_rate: u8,
    /// Redundant copy of `timestamp`, kept because chart consumers read a
    /// `date` field directly.
    pub date: jiff::Timestamp,
}

impl SessionRecord {
    /// Validate the metric bounds and the timestamp/date pairing of a
    /// record received from an external source.
    pub fn validate(&self) -> Result<(), CoreError> {
        let checks = [
            ("performance_score", self.performance_score, PERFORMANCE_RANGE),
            ("fatigue_level", self.fatigue_level, FATIGUE_RANGE),
            ("adherence_rate", self.adherence_rate, ADHERENCE_RANGE),
        ];
        for (field, value, range) in checks {
            if !range.contains(value) {
                return Err(CoreError::MetricOutOfRange {
                    field,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.date != self.timestamp {
            return Err(CoreError::DateMismatch {
                session_number: self.session_number,
            });
        }
        Ok(())
    }
}
