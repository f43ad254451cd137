//! Correlated per-session metric synthesis.
//!
//! Three bounded trends keyed to the session's position in the full series:
//! performance improves roughly linearly, fatigue tracks performance
//! inversely, and adherence follows a three-phase arc (strong start,
//! mid-treatment dip, partial recovery).

use motus_core::models::session::{ADHERENCE_RANGE, FATIGUE_RANGE, PERFORMANCE_RANGE};
use rand::Rng;

/// Fraction of the series covered by the high-adherence opening phase.
const ADHERENCE_EARLY_PHASE: f64 = 0.3;

/// End of the mid-treatment dip; the remainder of the series recovers.
const ADHERENCE_DIP_PHASE: f64 = 0.6;

/// The three per-session display metrics, produced together because fatigue
/// is derived from the performance draw rather than sampled independently.
#[derive(Debug, Clone, Copy)]
pub struct SessionMetrics {
    pub performance_score: u8,
    pub fatigue_level: u8,
    pub adherence_rate: u8,
}

/// Pre-noise performance expectation: a linear climb from ~40 to ~75 over
/// the course of treatment.
pub fn performance_baseline(session_index: u32, total_sessions: u32) -> f64 {
    40.0 + (session_index as f64 / total_sessions as f64) * 35.0
}

/// Pre-noise fatigue expectation for a given performance score; better
/// sessions leave the patient less fatigued.
pub fn fatigue_baseline(performance_score: u8) -> f64 {
    7.0 - (performance_score as f64 / 100.0) * 3.0
}

/// Pre-noise adherence expectation: 85 for the first 30% of sessions, 65
/// through the mid-treatment dip, 80 thereafter.
pub fn adherence_baseline(session_index: u32, total_sessions: u32) -> f64 {
    let position = session_index as f64 / total_sessions as f64;
    if position < ADHERENCE_EARLY_PHASE {
        85.0
    } else if position < ADHERENCE_DIP_PHASE {
        65.0
    } else {
        80.0
    }
}

/// Draw the metrics for the session at `session_index` (0-based, in
/// chronological order) out of `total_sessions`.
pub fn session_metrics<R: Rng>(
    session_index: u32,
    total_sessions: u32,
    rng: &mut R,
) -> SessionMetrics {
    let performance = performance_baseline(session_index, total_sessions)
        + rng.gen_range(-10.0..10.0);
    let performance_score = performance
        .clamp(PERFORMANCE_RANGE.min as f64, PERFORMANCE_RANGE.max as f64)
        .round() as u8;

    let fatigue = fatigue_baseline(performance_score) + rng.gen_range(-1.5..1.5);
    let fatigue_level = fatigue
        .clamp(FATIGUE_RANGE.min as f64, FATIGUE_RANGE.max as f64)
        .round() as u8;

    let adherence = adherence_baseline(session_index, total_sessions)
        + rng.gen_range(-7.5..7.5);
    let adherence_rate = adherence
        .clamp(ADHERENCE_RANGE.min as f64, ADHERENCE_RANGE.max as f64)
        .round() as u8;

    SessionMetrics {
        performance_score,
        fatigue_level,
        adherence_rate,
    }
}
