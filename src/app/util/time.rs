use chrono::{DateTime, Duration, Months, NaiveDate, Utc};

pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

pub fn months_before(time: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    time.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn months_after(time: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    time.checked_add_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn parse_range_start(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Parses an RFC 3339 timestamp, or a `YYYY-MM-DD` date as the last
/// microsecond of that UTC day so the day itself is included.
pub fn parse_range_end(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let start_of_next_day = date.succ_opt()?.and_hms_opt(0, 0, 0)?.and_utc();
    Some(start_of_next_day - Duration::microseconds(1))
}
