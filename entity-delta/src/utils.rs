use chrono::{DateTime, Utc};

/// Changelog timestamp for a point in time, `YYYYMMDDHHMMSS` in UTC
pub fn changelog_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d%H%M%S").to_string()
}

/// Changelog timestamp for the current instant
pub fn changelog_timestamp_now() -> String {
    changelog_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_changelog_timestamp() {
        let at = Utc.with_ymd_and_hms(2019, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(changelog_timestamp(at), "20190307090501");
    }

    #[test]
    fn test_changelog_timestamp_now_shape() {
        let ts = changelog_timestamp_now();
        assert_eq!(ts.len(), 14);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
    }
}
