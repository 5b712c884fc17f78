#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use presence::db::attendance::{AttendanceRecord, AttendanceStatus};
    use presence::db::{AttendanceId, EmployeeId};
    use presence::libs::formatter::{
        format_clock, format_duration, format_hours, format_percent, round_to_tenth, ReportRow, EMPTY_CELL,
    };
    use presence::libs::messages::Message;
    use presence::{msg_bail_anyhow, msg_error_anyhow};

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock("09:00:00"), "09:00");
        assert_eq!(format_clock("7:05"), "07:05");
        assert_eq!(format_clock(""), EMPTY_CELL);
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_hours(8.0), "8.0h");
        assert_eq!(format_hours(6.75), "6.8h");
        assert_eq!(format_percent(100.0 / 3.0), "33.3%");
        assert_eq!(round_to_tenth(200.0 / 3.0), 66.7);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::minutes(125)), "02:05");
        assert_eq!(format_duration(&Duration::hours(41)), "41:00");
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }

    #[test]
    fn test_report_row_from_record() {
        let record = AttendanceRecord {
            id: AttendanceId(1),
            employee_id: EmployeeId(1),
            employee_name: "Jane Smith".to_string(),
            department: "Human Resources".to_string(),
            status: AttendanceStatus::Late,
            date: NaiveDate::from_ymd_opt(2023, 10, 2).unwrap(),
            time_in: "10:15:00".to_string(),
            time_out: "18:00:00".to_string(),
            break_time: "01:00:00".to_string(),
        };

        let row = ReportRow::from(&record);
        assert_eq!(row.date, "2023-10-02");
        assert_eq!(row.check_in, "10:15");
        assert_eq!(row.status, "Late");
        assert_eq!(row.work_hours, "6.8h");
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            Message::ExportCompleted("out.csv".to_string()).to_string(),
            "Export completed: out.csv"
        );
        assert_eq!(
            Message::InvalidDate("yesterday".to_string()).to_string(),
            "Invalid date 'yesterday', expected YYYY-MM-DD or 'today'"
        );
    }

    #[test]
    fn test_error_text_has_no_prefix() {
        let err = msg_error_anyhow!(Message::InvalidDate("yesterday".to_string()));
        assert_eq!(err.to_string(), "Invalid date 'yesterday', expected YYYY-MM-DD or 'today'");

        fn bail() -> anyhow::Result<()> {
            msg_bail_anyhow!(Message::ExportCompleted("out.csv".to_string()));
        }
        assert_eq!(bail().unwrap_err().to_string(), "Export completed: out.csv");
    }
}
