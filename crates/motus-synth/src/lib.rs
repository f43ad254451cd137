//! motus-synth
//!
//! Synthetic session-series generation for the Motus dashboard. Given a
//! completed-session count, produces a chronologically ordered series of
//! per-session clinical metrics with believable structure: sessions cluster
//! within days, the day count tracks a target daily rate, and the three
//! metric trends are correlated and phased.
//!
//! The pipeline is pure; callers inject the reference day and the random
//! source, so a seeded generator reproduces a series exactly.

pub mod clustering;
pub mod error;
pub mod metrics;
pub mod schedule;

use jiff::Span;
use jiff::civil::Date;
use motus_core::models::SessionRecord;
use rand::Rng;

use crate::error::SynthError;

/// Generate the full synthetic series for a patient with
/// `completed_sessions` finished sessions, the most recent on `today`.
///
/// The result is sorted by timestamp ascending with `session_number`
/// running 1..=len in that order. Its length equals `completed_sessions`
/// unless the daily distribution leaves more than
/// [`schedule::FINAL_DAY_CAP`] sessions for the oldest day, in which case
/// the excess is dropped (a deliberate display-density ceiling).
///
/// Counts of zero are rejected; substituting a demo default for an unknown
/// count is the caller's job (see `motus_core::models::progress`).
pub fn generate_session_series<R: Rng>(
    completed_sessions: u32,
    today: Date,
    rng: &mut R,
) -> Result<Vec<SessionRecord>, SynthError> {
    if completed_sessions == 0 {
        return Err(SynthError::InvalidSessionCount(completed_sessions));
    }

    let total_days = schedule::plan_total_days(completed_sessions);
    let loads = schedule::plan_daily_loads(completed_sessions, total_days, rng);

    // Days are planned newest-first, so the slots come out of order across
    // day boundaries; the sort below is what establishes the series order.
    let mut slots = Vec::with_capacity(completed_sessions as usize);
    for (days_back, &count) in loads.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let day = today.checked_sub(Span::new().days(days_back as i64))?;
        slots.extend(clustering::cluster_day(day, count, rng)?);
    }
    slots.sort();

    let mut series = Vec::with_capacity(slots.len());
    for (index, timestamp) in slots.iter().copied().enumerate() {
        let drawn = metrics::session_metrics(index as u32, completed_sessions, rng);
        series.push(SessionRecord {
            timestamp,
            session_number: index as u32 + 1,
            performance_score: drawn.performance_score,
            fatigue_level: drawn.fatigue_level,
            adherence_rate: drawn.adherence_rate,
            date: timestamp,
        });
    }
    Ok(series)
}
