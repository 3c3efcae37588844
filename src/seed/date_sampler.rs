use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::app::util::time;

use super::{config::REGISTRATION_WINDOW_MONTHS, errors::SeedError};

pub fn random_registration_date<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, SeedError> {
    let earliest = time::months_before(now, REGISTRATION_WINDOW_MONTHS);
    random_date_between(rng, earliest, now)
}

/// Uniform in `[start, end)` at microsecond resolution.
///
/// Fails with [`SeedError::InvalidDateRange`] unless `end` is strictly after
/// `start`.
pub fn random_date_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<DateTime<Utc>, SeedError> {
    if end <= start {
        return Err(SeedError::InvalidDateRange { start, end });
    }

    let span = (end - start).num_microseconds().unwrap_or(i64::MAX);
    if span == 0 {
        return Ok(start);
    }

    Ok(start + Duration::microseconds(rng.gen_range(0..span)))
}
