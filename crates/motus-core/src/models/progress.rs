use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Substituted when a patient's completed-session count is zero or unknown,
/// so demo charts always have something to draw.
pub const DEFAULT_COMPLETED_SESSIONS: u32 = 8;

/// Default length of a prescribed treatment plan.
pub const EXPECTED_TOTAL_SESSIONS: u32 = 30;

/// Map an absent or zero session count to the demo default. The series
/// generator itself rejects zero; this normalization is the caller's job.
pub fn normalize_completed_count(count: Option<u32>) -> u32 {
    match count {
        Some(n) if n > 0 => n,
        _ => DEFAULT_COMPLETED_SESSIONS,
    }
}

/// Completion state of a treatment plan, as shown in the dashboard's
/// progress ring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentProgress {
    pub completed_sessions: u32,
    pub expected_sessions: u32,
}

impl TreatmentProgress {
    pub fn new(completed_sessions: u32) -> Self {
        Self {
            completed_sessions,
            expected_sessions: EXPECTED_TOTAL_SESSIONS,
        }
    }

    /// Fraction of the plan completed, clamped to [0, 1].
    pub fn ratio(&self) -> f64 {
        if self.expected_sessions == 0 {
            return 0.0;
        }
        (self.completed_sessions as f64 / self.expected_sessions as f64).clamp(0.0, 1.0)
    }
}
