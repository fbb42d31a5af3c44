//! Timestamp helpers shared by the engine and its hosts

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Config millisecond values (e.g. `timeout_ms`) as a `Duration`
pub fn millis_to_duration(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// RFC 3339 with second precision, as written into saved snapshots
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_is_recent() {
        // 2020-01-01 .. 2100-01-01
        let ts = now().timestamp();
        assert!(ts > 1_577_836_800);
        assert!(ts < 4_102_444_800);
    }

    #[test]
    fn test_millis_to_duration() {
        assert_eq!(millis_to_duration(0), Duration::ZERO);
        assert_eq!(millis_to_duration(5000), Duration::from_secs(5));
    }

    #[test]
    fn test_format_timestamp_uses_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01T12:30:05Z");
    }
}
