//! Time utilities

use chrono::{DateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Check if a datetime is in the past
pub fn is_past(dt: DateTime<Utc>) -> bool {
    dt < now_utc()
}

/// Format a date the way it appears on certificates, e.g. "January 15, 2026"
pub fn format_display_date(dt: DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// Filesystem-safe timestamp used in certificate filenames
pub fn format_file_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_display_date() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_display_date(dt), "January 15, 2026");
    }

    #[test]
    fn test_format_file_timestamp() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 9, 5, 30).unwrap();
        assert_eq!(format_file_timestamp(dt), "20260115_090530");
    }

    #[test]
    fn test_is_past() {
        let past = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!(is_past(past));
    }
}
