//! Intraday timestamp clustering.
//!
//! Sessions within a day model one short back-to-back visit: a single start
//! time in the morning, with each session roughly five minutes after the
//! previous one.

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use rand::Rng;

use crate::error::SynthError;

/// Minutes between the nominal starts of consecutive sessions in a visit.
const SESSION_SPACING_MINUTES: i32 = 5;

/// Produce `count` ascending instants on `day`, clustered as one visit.
///
/// The visit starts at 9 or 10 o'clock plus up to half an hour; each session
/// sits five minutes after the previous one with up to two minutes of
/// jitter either way. Seconds are always zero, and the jitter is small
/// enough that successive sessions never collide.
pub fn cluster_day<R: Rng>(
    day: Date,
    count: u32,
    rng: &mut R,
) -> Result<Vec<Timestamp>, SynthError> {
    let start_hour: i32 = rng.gen_range(9..11);
    let start_minute: i32 = rng.gen_range(0..30);

    let mut instants = Vec::with_capacity(count as usize);
    for session_of_day in 0..count as i32 {
        let jitter = rng.gen_range(-2..2);
        // Total minutes from midnight; carry into hours, floor at midnight.
        let total = (start_hour * 60 + start_minute + session_of_day * SESSION_SPACING_MINUTES
            + jitter)
            .max(0);
        let clock = day.at((total / 60) as i8, (total % 60) as i8, 0, 0);
        instants.push(clock.to_zoned(TimeZone::UTC)?.timestamp());
    }
    Ok(instants)
}
