#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use presence::commands::{parse_date, report_range};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_default_range_includes_both_ends() {
        let (from, to) = report_range(None, day(31), 30).unwrap();

        assert_eq!(to, day(31));
        assert_eq!(from, day(1));
        assert_eq!(from.iter_days().take_while(|d| *d <= to).count(), 31);
        assert_eq!(to - from, Duration::days(30));
    }

    #[test]
    fn test_explicit_from_is_kept() {
        assert_eq!(report_range(Some(day(5)), day(10), 30).unwrap(), (day(5), day(10)));
        assert_eq!(report_range(Some(day(10)), day(10), 30).unwrap(), (day(10), day(10)));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = report_range(Some(day(11)), day(10), 30).unwrap_err();
        assert!(err.to_string().contains("2024-03-11"));
    }

    #[test]
    fn test_range_before_earliest_date_is_rejected() {
        assert!(report_range(None, NaiveDate::MIN, 30).is_err());
        assert!(report_range(None, day(10), u32::MAX).is_err());
        assert_eq!(report_range(None, NaiveDate::MIN, 0).unwrap(), (NaiveDate::MIN, NaiveDate::MIN));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-05").unwrap(), day(5));
        assert!(parse_date("TODAY").is_ok());
        assert!(parse_date("05/03/2024").is_err());
    }
}
