#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use presence::db::attendance::NewAttendance;
    use presence::db::employees::NewEmployee;
    use presence::db::organization::NewDesignation;
    use presence::db::store::{Command, Store};
    use presence::db::{DesignationId, EmployeeId};
    use presence::libs::aggregate::StatusCounts;
    use presence::libs::dashboard::{dashboard, work_hours_distribution, MAX_TREND_DAYS};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 12).unwrap()
    }

    fn add_employee(store: Store, name: &str, department: &str, designation: &str) -> (Store, EmployeeId) {
        let department_id = store.department_by_name(department).unwrap().id;
        let designation_id: DesignationId = store.designations().iter().find(|d| d.name == designation).unwrap().id;
        let new = NewEmployee::new(name, "someone@example.com", department_id, designation_id, today());
        let store = store.apply(Command::AddEmployee(new)).unwrap();
        let id = EmployeeId(store.last_inserted_id().unwrap());
        (store, id)
    }

    fn register() -> Store {
        let store = Store::new()
            .apply_all([
                Command::AddDepartment("Engineering".to_string()),
                Command::AddDepartment("Human Resources".to_string()),
            ])
            .unwrap();
        let engineering = store.department_by_name("Engineering").unwrap().id;
        let hr = store.department_by_name("Human Resources").unwrap().id;
        let store = store
            .apply_all([
                Command::AddDesignation(NewDesignation::new("Software Engineer", engineering)),
                Command::AddDesignation(NewDesignation::new("HR Manager", hr)),
            ])
            .unwrap();

        let (store, john) = add_employee(store, "John Doe", "Engineering", "Software Engineer");
        let (store, jane) = add_employee(store, "Jane Smith", "Human Resources", "HR Manager");
        let (store, _mike) = add_employee(store, "Michael Johnson", "Engineering", "Software Engineer");

        store
            .apply_all([
                Command::AddAttendance(NewAttendance::present(john, today(), "09:00", "18:00", "01:00")),
                Command::AddAttendance(NewAttendance::late(jane, today(), "10:15", "18:00", "01:00")),
                Command::AddAttendance(NewAttendance::absent(john, today() - Duration::days(2))),
                Command::AddAttendance(NewAttendance::present(jane, today() - Duration::days(30), "09:00", "18:00", "")),
            ])
            .unwrap()
    }

    #[test]
    fn test_dashboard_today() {
        let summary = dashboard(&register(), today(), 7);

        assert_eq!(summary.total_employees, 3);
        assert_eq!(summary.active_employees, 3);
        assert_eq!(summary.today, StatusCounts { present: 1, late: 1, absent: 0 });
        assert_eq!(summary.attendance_rate, 67);
    }

    #[test]
    fn test_dashboard_trend_has_every_day() {
        let summary = dashboard(&register(), today(), 7);

        assert_eq!(summary.trend.len(), 7);
        assert_eq!(summary.trend.first().map(|(d, _)| *d), Some(today() - Duration::days(6)));
        assert_eq!(summary.trend.last().map(|(d, _)| *d), Some(today()));
        assert_eq!(summary.trend[4].1, StatusCounts { present: 0, late: 0, absent: 1 });
        assert_eq!(summary.trend[3].1, StatusCounts::default());
    }

    #[test]
    fn test_dashboard_department_distribution() {
        let summary = dashboard(&register(), today(), 7);
        let distribution: Vec<(&str, usize)> = summary
            .department_distribution
            .iter()
            .map(|d| (d.name.as_str(), d.count))
            .collect();
        assert_eq!(distribution, vec![("Engineering", 2), ("Human Resources", 1)]);
    }

    #[test]
    fn test_dashboard_without_employees() {
        let summary = dashboard(&Store::new(), today(), 3);
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.attendance_rate, 0);
        assert_eq!(summary.trend.len(), 3);
    }

    #[test]
    fn test_work_hours_distribution() {
        let store = register();
        let window: Vec<_> = store.attendances().iter().filter(|a| a.date == today()).collect();
        let buckets = work_hours_distribution(&window);

        let counts: Vec<(&str, usize)> = buckets.iter().map(|b| (b.label.as_str(), b.employees)).collect();
        assert_eq!(
            counts,
            vec![("< 7 hours", 1), ("7-8 hours", 0), ("8-9 hours", 1), ("9+ hours", 0)]
        );
    }

    #[test]
    fn test_dashboard_trend_is_capped() {
        let summary = dashboard(&register(), today(), u32::MAX);

        assert_eq!(summary.trend.len(), MAX_TREND_DAYS as usize);
        assert_eq!(summary.trend.last().map(|(d, _)| *d), Some(today()));
        assert_eq!(summary.today, StatusCounts { present: 1, late: 1, absent: 0 });
    }

    #[test]
    fn test_dashboard_at_earliest_date() {
        let summary = dashboard(&register(), NaiveDate::MIN, 7);

        assert_eq!(summary.trend, vec![(NaiveDate::MIN, StatusCounts::default())]);
        assert_eq!(summary.attendance_rate, 0);
    }
}
