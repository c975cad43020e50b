//! Backend timestamp parsing and calendar-date formatting.
//!
//! The backend is inconsistent about timestamps: some endpoints send RFC 3339
//! with an offset, most send a naive `LocalDateTime` in Korean wall-clock time,
//! and a few send a bare date. Everything is normalised to a naive wall-clock
//! value in KST, which is what the storefront displays.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// UTC offset of Korea Standard Time, in seconds.
pub const KST_OFFSET_SECS: i32 = 9 * 3600;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp into KST wall-clock time.
///
/// Returns `None` when the string matches none of the known formats.
pub fn parse_backend_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        let kst = FixedOffset::east_opt(KST_OFFSET_SECS)?;
        return Some(dt.with_timezone(&kst).naive_local());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format as the fixed-width `YYYY.MM.DD` used in history lists.
///
/// Fixed width matters: grouped history is ordered by plain string comparison.
pub fn format_dot_date(dt: &NaiveDateTime) -> String {
    dt.format("%Y.%m.%d").to_string()
}
