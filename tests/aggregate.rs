#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use presence::db::attendance::{AttendanceRecord, AttendanceStatus};
    use presence::db::{AttendanceId, EmployeeId};
    use presence::libs::aggregate::{aggregate, AttendanceStats, DepartmentCount, StatusCounts};

    const DEPARTMENTS: [&str; 3] = ["Engineering", "Human Resources", "Finance"];

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, d).unwrap()
    }

    fn record(id: u64, department: &str, status: AttendanceStatus, date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            id: AttendanceId(id),
            employee_id: EmployeeId(id),
            employee_name: format!("Employee {}", id),
            department: department.to_string(),
            status,
            date,
            time_in: "09:00:00".to_string(),
            time_out: "18:00:00".to_string(),
            break_time: "01:00:00".to_string(),
        }
    }

    fn sample() -> Vec<AttendanceRecord> {
        vec![
            record(1, "Engineering", AttendanceStatus::Present, day(2)),
            record(2, "Engineering", AttendanceStatus::Late, day(2)),
            record(3, "Human Resources", AttendanceStatus::Absent, day(3)),
            record(4, "Engineering", AttendanceStatus::Present, day(3)),
            record(5, "Marketing", AttendanceStatus::Present, day(4)),
        ]
    }

    #[test]
    fn test_status_counts_sum_to_total() {
        let records = sample();
        let counts = records.status_counts();
        assert_eq!(counts, StatusCounts { present: 3, late: 1, absent: 1 });
        assert_eq!(counts.total(), records.len());
        assert_eq!(counts.attending(), 4);
        assert_eq!(counts.get(AttendanceStatus::Late), 1);
    }

    #[test]
    fn test_department_counts_include_zero_rows() {
        let records = sample();
        let counts = records.department_counts(&DEPARTMENTS);
        assert_eq!(
            counts,
            vec![
                DepartmentCount { name: "Engineering".to_string(), count: 3 },
                DepartmentCount { name: "Human Resources".to_string(), count: 1 },
                DepartmentCount { name: "Finance".to_string(), count: 0 },
            ]
        );
    }

    #[test]
    fn test_daily_counts_per_date() {
        let records = sample();
        let daily = records.daily_counts();
        assert_eq!(daily.len(), 3);
        assert_eq!(daily[&day(2)], StatusCounts { present: 1, late: 1, absent: 0 });
        assert_eq!(daily[&day(3)], StatusCounts { present: 1, late: 0, absent: 1 });
        assert_eq!(daily.values().map(StatusCounts::total).sum::<usize>(), records.len());
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let records = sample();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(aggregate(&records, &DEPARTMENTS), aggregate(&reversed, &DEPARTMENTS));
    }

    #[test]
    fn test_aggregate_over_references() {
        let records = sample();
        let refs: Vec<&AttendanceRecord> = records.iter().collect();
        assert_eq!(aggregate(&refs, &DEPARTMENTS), aggregate(&records, &DEPARTMENTS));
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<AttendanceRecord> = Vec::new();
        let counted = aggregate(&records, &DEPARTMENTS);
        assert_eq!(counted.status_counts, StatusCounts::default());
        assert!(counted.daily_counts.is_empty());
        assert!(counted.department_counts.iter().all(|d| d.count == 0));
        assert!(counted.trend(10).is_empty());
    }

    #[test]
    fn test_trend_keeps_latest_days_ascending() {
        let records: Vec<AttendanceRecord> = (1..=15)
            .map(|d| record(u64::from(d), "Engineering", AttendanceStatus::Present, day(d)))
            .collect();
        let trend = aggregate(&records, &DEPARTMENTS).trend(10);

        let dates: Vec<NaiveDate> = trend.iter().map(|(date, _)| *date).collect();
        assert_eq!(dates, (6..=15).map(day).collect::<Vec<_>>());
    }

    #[test]
    fn test_departments_by_count_is_stable() {
        let records = vec![
            record(1, "Finance", AttendanceStatus::Present, day(2)),
            record(2, "Human Resources", AttendanceStatus::Present, day(2)),
        ];
        let ordered = aggregate(&records, &DEPARTMENTS).departments_by_count();
        let names: Vec<&str> = ordered.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Human Resources", "Finance", "Engineering"]);
    }
}
