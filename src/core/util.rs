//! Common utilities

use chrono::{DateTime, Local, TimeZone};

/// Format used for the `Generated on` report field
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Human-readable local time for report headers
pub fn generation_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Format a timestamp for report headers
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_timestamp() {
        let time = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(format_timestamp(&time), "Tue Mar 05 14:07:09 UTC 2024");
    }

    #[test]
    fn test_generation_timestamp_not_empty() {
        assert!(!generation_timestamp().is_empty());
    }
}
