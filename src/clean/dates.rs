use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Timestamp layouts seen across the source exports, tried in order after
/// RFC 3339. All are reduced to a naive calendar date.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a source-provided date value permissively.
///
/// Timezone offsets are stripped (the calendar date is taken from the UTC
/// instant) and time-of-day is discarded. Anything that fails every known
/// layout coerces to `None` rather than erroring.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc().date());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
