//! Day-count planning and daily session-load distribution.
//!
//! The planner turns a completed-session count into a calendar window; the
//! distributor then decides, day by day from the most recent backwards, how
//! many of the remaining sessions land on each day.

use rand::Rng;

/// Target average daily load. Chosen so a full 30-session plan spans the
/// maximum 14-day window.
pub const TARGET_SESSIONS_PER_DAY: f64 = 2.14;

/// Minimum calendar window, so even a handful of sessions reads as a spread.
pub const MIN_SPAN_DAYS: u32 = 3;

/// Maximum calendar window; larger counts compress into a higher daily load
/// instead of widening the chart axis.
pub const MAX_SPAN_DAYS: u32 = 14;

/// Hard ceiling on sessions placed on the final (oldest) day. Remaining
/// sessions beyond this are dropped rather than crowding one day.
pub const FINAL_DAY_CAP: u32 = 6;

/// Ceiling on a single randomized daily draw.
const MAX_RANDOM_DRAW: u32 = 4;

/// Number of calendar days the series should span: `ceil(n / target rate)`,
/// clamped to the [3, 14] window.
pub fn plan_total_days(completed_sessions: u32) -> u32 {
    let needed = (completed_sessions as f64 / TARGET_SESSIONS_PER_DAY).ceil() as u32;
    needed.clamp(MIN_SPAN_DAYS, MAX_SPAN_DAYS)
}

/// How many sessions to place on the current day, given the remaining count
/// and the number of days still available (current day included).
fn sessions_for_day<R: Rng>(remaining: u32, days_remaining: u32, rng: &mut R) -> u32 {
    if remaining <= 1 {
        return remaining;
    }
    if days_remaining == 1 {
        return remaining.min(FINAL_DAY_CAP);
    }

    let avg_needed = remaining as f64 / days_remaining as f64;
    let drawn = if avg_needed <= 1.5 {
        if rng.gen_bool(0.7) { 1 } else { 2 }
    } else if avg_needed <= 3.0 {
        if rng.gen_bool(0.7) { 2 } else { 3 }
    } else {
        let jittered = (avg_needed + rng.gen_range(-0.5..0.5)).ceil() as u32;
        jittered.min(MAX_RANDOM_DRAW)
    };
    drawn.min(remaining)
}

/// Distribute `completed_sessions` across `total_days` days.
///
/// Index 0 of the returned vector is the most recent day; the oldest day is
/// last. The distribution stops once every session is placed, so trailing
/// (older) days may hold zero sessions. The sum of the loads equals the
/// requested count except when more than [`FINAL_DAY_CAP`] sessions are
/// still unplaced on the oldest day, in which case the excess is dropped.
pub fn plan_daily_loads<R: Rng>(
    completed_sessions: u32,
    total_days: u32,
    rng: &mut R,
) -> Vec<u32> {
    let mut loads = vec![0u32; total_days as usize];
    let mut remaining = completed_sessions;
    for days_back in 0..total_days {
        if remaining == 0 {
            break;
        }
        let days_remaining = total_days - days_back;
        let placed = sessions_for_day(remaining, days_remaining, rng);
        loads[days_back as usize] = placed;
        remaining -= placed;
    }
    loads
}
