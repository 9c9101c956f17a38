#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, TimeZone};
    use ttrack::api::tracking_time::{now, DATE_FORMAT};

    #[test]
    fn test_fixed_datetime_formats_as_expected() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2026, 8, 6, 12, 30, 5).unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2026-08-06 12:30:05+03:00");
    }

    #[test]
    fn test_negative_offset_keeps_the_sign() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2026-01-02 03:04:05-05:00");
    }

    #[test]
    fn test_now_round_trips_through_the_api_format() {
        let stamp = now();
        assert!(DateTime::<FixedOffset>::parse_from_str(&stamp, DATE_FORMAT).is_ok());
        // date, space, time, explicit offset
        assert_eq!(stamp.len(), "YYYY-MM-DD HH:MM:SS+HH:MM".len());
        assert_eq!(&stamp[10..11], " ");
    }
}
