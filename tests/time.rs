#[cfg(test)]
mod tests {
    use chrono::Duration;
    use presence::libs::time::{normalize_clock, parse_clock_minutes, work_duration, work_hours, work_minutes};

    #[test]
    fn test_work_hours_full_day_with_break() {
        assert_eq!(work_hours("09:00", "18:00", "01:00"), 8.0);
        assert_eq!(work_hours("10:15", "18:00", "01:00"), 6.75);
        assert_eq!(work_hours("09:00", "17:30", "00:30"), 8.0);
    }

    #[test]
    fn test_work_hours_ignores_seconds() {
        assert_eq!(work_hours("09:00:59", "18:00:01", "01:00:30"), 8.0);
        assert_eq!(work_minutes("09:00:00", "09:45:00", ""), 45);
    }

    #[test]
    fn test_work_hours_never_negative() {
        assert_eq!(work_hours("18:00", "09:00", "00:00"), 0.0);
        assert_eq!(work_hours("09:00", "10:00", "02:00"), 0.0);
        assert_eq!(work_hours("09:00", "09:00", ""), 0.0);
    }

    #[test]
    fn test_work_hours_missing_clock_is_zero() {
        assert_eq!(work_hours("", "18:00", "01:00"), 0.0);
        assert_eq!(work_hours("09:00", "", "01:00"), 0.0);
        assert_eq!(work_hours("nine", "18:00", ""), 0.0);
    }

    #[test]
    fn test_malformed_break_counts_as_no_break() {
        assert_eq!(work_hours("09:00", "18:00", ""), 9.0);
        assert_eq!(work_hours("09:00", "18:00", "lunch"), 9.0);
    }

    #[test]
    fn test_work_hours_bounded_by_span() {
        let clocks = ["00:00", "06:30", "09:00", "12:15", "18:00", "23:59"];
        for time_in in clocks {
            for time_out in clocks {
                let hours = work_hours(time_in, time_out, "00:45");
                assert!(hours >= 0.0);
                assert!(hours <= work_hours(time_in, time_out, "00:00"));
            }
        }
    }

    #[test]
    fn test_parse_clock_rejects_out_of_range() {
        assert_eq!(parse_clock_minutes("24:00"), None);
        assert_eq!(parse_clock_minutes("12:60"), None);
        assert_eq!(parse_clock_minutes("12"), None);
        assert_eq!(parse_clock_minutes("23:59"), Some(1439));
    }

    #[test]
    fn test_normalize_clock() {
        assert_eq!(normalize_clock("9:00").as_deref(), Some("09:00:00"));
        assert_eq!(normalize_clock("18:30:15").as_deref(), Some("18:30:15"));
        assert_eq!(normalize_clock("18:30:75"), None);
        assert_eq!(normalize_clock(""), None);
    }

    #[test]
    fn test_work_duration() {
        assert_eq!(work_duration("09:00", "18:00", "01:00"), Duration::hours(8));
        assert_eq!(work_duration("18:00", "09:00", ""), Duration::zero());
    }
}
