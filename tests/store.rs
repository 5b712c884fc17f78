#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use presence::db::attendance::{AttendanceStatus, NewAttendance};
    use presence::db::employees::NewEmployee;
    use presence::db::leaves::{LeaveState, NewLeave};
    use presence::db::organization::NewDesignation;
    use presence::db::store::{Command, EntityKind, Store, StoreError};
    use presence::db::{AttendanceId, DepartmentId, DesignationId, EmployeeId};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, d).unwrap()
    }

    struct Register {
        store: Store,
        engineering: DepartmentId,
        hr: DepartmentId,
        engineer: DesignationId,
        hr_manager: DesignationId,
        john: EmployeeId,
    }

    fn register() -> Register {
        let store = Store::new()
            .apply_all([
                Command::AddDepartment("Engineering".to_string()),
                Command::AddDepartment("Human Resources".to_string()),
            ])
            .unwrap();
        let engineering = store.department_by_name("Engineering").unwrap().id;
        let hr = store.department_by_name("Human Resources").unwrap().id;

        let store = store
            .apply(Command::AddDesignation(NewDesignation::new("Software Engineer", engineering)))
            .unwrap();
        let engineer = DesignationId(store.last_inserted_id().unwrap());
        let store = store
            .apply(Command::AddDesignation(NewDesignation::new("HR Manager", hr)))
            .unwrap();
        let hr_manager = DesignationId(store.last_inserted_id().unwrap());

        let store = store
            .apply(Command::AddEmployee(NewEmployee::new(
                "John Doe",
                "john.doe@example.com",
                engineering,
                engineer,
                day(1),
            )))
            .unwrap();
        let john = EmployeeId(store.last_inserted_id().unwrap());

        Register { store, engineering, hr, engineer, hr_manager, john }
    }

    #[test]
    fn test_ids_are_unique_across_entities() {
        let reg = register();
        let mut ids: Vec<u64> = reg.store.departments().iter().map(|d| d.id.0).collect();
        ids.extend(reg.store.designations().iter().map(|d| d.id.0));
        ids.extend(reg.store.employees().iter().map(|e| e.id.0));
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_add_attendance_copies_employee_fields() {
        let reg = register();
        let store = reg
            .store
            .apply(Command::AddAttendance(NewAttendance::present(reg.john, day(2), "09:00", "18:00", "01:00")))
            .unwrap();

        let record = &store.attendances()[0];
        assert_eq!(record.employee_name, "John Doe");
        assert_eq!(record.department, "Engineering");
        assert_eq!(record.time_in, "09:00:00");
        assert_eq!(record.time_out, "18:00:00");
        assert_eq!(record.break_time, "01:00:00");
        assert_eq!(record.work_hours(), 8.0);
        assert_eq!(store.attendance_by_employee(reg.john).len(), 1);
    }

    #[test]
    fn test_absent_clears_times() {
        let reg = register();
        let mut absent = NewAttendance::absent(reg.john, day(2));
        absent.time_in = "09:00".to_string();
        absent.time_out = "18:00".to_string();
        let store = reg.store.apply(Command::AddAttendance(absent)).unwrap();

        let record = &store.attendances()[0];
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert!(record.time_in.is_empty());
        assert!(record.time_out.is_empty());
        assert_eq!(record.work_hours(), 0.0);
    }

    #[test]
    fn test_rejects_invalid_times() {
        let reg = register();

        let reversed = reg
            .store
            .apply(Command::AddAttendance(NewAttendance::late(reg.john, day(2), "18:00", "09:00", "")));
        assert_eq!(reversed, Err(StoreError::InvalidTimes("time out must be after time in")));

        let missing = reg
            .store
            .apply(Command::AddAttendance(NewAttendance::present(reg.john, day(2), "", "18:00", "")));
        assert_eq!(missing, Err(StoreError::InvalidTimes("time in is missing or malformed")));

        let bad_break = reg
            .store
            .apply(Command::AddAttendance(NewAttendance::present(reg.john, day(2), "09:00", "18:00", "soon")));
        assert_eq!(bad_break, Err(StoreError::InvalidTimes("break time is malformed")));
    }

    #[test]
    fn test_rejected_command_leaves_store_unchanged() {
        let reg = register();
        let before = reg.store.clone();

        let result = reg.store.apply_all([
            Command::AddAttendance(NewAttendance::present(reg.john, day(2), "09:00", "18:00", "")),
            Command::AddAttendance(NewAttendance::present(EmployeeId(999), day(2), "09:00", "18:00", "")),
        ]);

        assert_eq!(result, Err(StoreError::UnknownEmployee(EmployeeId(999))));
        assert_eq!(reg.store, before);
        assert!(reg.store.attendances().is_empty());
    }

    #[test]
    fn test_dangling_references_are_rejected() {
        let reg = register();

        let designation = reg
            .store
            .apply(Command::AddDesignation(NewDesignation::new("Analyst", DepartmentId(999))));
        assert_eq!(designation, Err(StoreError::UnknownDepartment(DepartmentId(999))));

        let mismatched = reg.store.apply(Command::AddEmployee(NewEmployee::new(
            "Jane Smith",
            "jane.smith@example.com",
            reg.hr,
            reg.engineer,
            day(1),
        )));
        assert_eq!(
            mismatched,
            Err(StoreError::DesignationOutsideDepartment {
                designation: reg.engineer,
                department: reg.hr,
            })
        );

        let leave = reg.store.apply(Command::AddLeave(NewLeave::new(
            EmployeeId(999),
            day(1),
            day(2),
            "Vacation",
            LeaveState::Pending,
        )));
        assert_eq!(leave, Err(StoreError::UnknownEmployee(EmployeeId(999))));
    }

    #[test]
    fn test_department_in_use_cannot_be_deleted() {
        let reg = register();
        assert_eq!(
            reg.store.apply(Command::DeleteDepartment(reg.engineering)),
            Err(StoreError::DepartmentInUse(reg.engineering))
        );
        assert_eq!(
            reg.store.apply(Command::DeleteDesignation(reg.engineer)),
            Err(StoreError::DesignationInUse(reg.engineer))
        );

        let store = reg
            .store
            .apply_all([Command::DeleteDesignation(reg.hr_manager), Command::DeleteDepartment(reg.hr)])
            .unwrap();
        assert!(store.department(reg.hr).is_none());
        assert_eq!(store.departments().len(), 1);
    }

    #[test]
    fn test_update_and_delete_unknown_ids() {
        let reg = register();
        assert_eq!(
            reg.store.apply(Command::DeleteAttendance(AttendanceId(42))),
            Err(StoreError::NotFound { kind: EntityKind::Attendance, id: 42 })
        );
        assert_eq!(
            reg.store.apply(Command::UpdateDepartment(DepartmentId(42), "Ops".to_string())),
            Err(StoreError::NotFound { kind: EntityKind::Department, id: 42 })
        );
        assert_eq!(
            reg.store.apply(Command::AddDepartment("   ".to_string())),
            Err(StoreError::EmptyName(EntityKind::Department))
        );
    }

    #[test]
    fn test_update_attendance_replaces_fields() {
        let reg = register();
        let store = reg
            .store
            .apply(Command::AddAttendance(NewAttendance::present(reg.john, day(2), "09:00", "18:00", "01:00")))
            .unwrap();
        let id = AttendanceId(store.last_inserted_id().unwrap());

        let store = store
            .apply(Command::UpdateAttendance(id, NewAttendance::late(reg.john, day(2), "10:15", "18:00", "01:00")))
            .unwrap();
        let record = store.attendance(id).unwrap();
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.time_in, "10:15:00");

        let store = store.apply(Command::DeleteAttendance(id)).unwrap();
        assert!(store.attendances().is_empty());
    }

    #[test]
    fn test_deleting_employee_keeps_history() {
        let reg = register();
        let store = reg
            .store
            .apply_all([
                Command::AddAttendance(NewAttendance::present(reg.john, day(2), "09:00", "18:00", "")),
                Command::DeleteEmployee(reg.john),
            ])
            .unwrap();

        assert!(store.employee(reg.john).is_none());
        assert_eq!(store.attendances().len(), 1);
        assert_eq!(store.attendances()[0].employee_name, "John Doe");
    }

    #[test]
    fn test_leave_period_must_not_end_before_start() {
        let reg = register();
        let result = reg.store.apply(Command::AddLeave(NewLeave::new(
            reg.john,
            day(5),
            day(3),
            "Trip",
            LeaveState::Approved,
        )));
        assert_eq!(result, Err(StoreError::InvalidLeavePeriod));

        let store = reg
            .store
            .apply(Command::AddLeave(NewLeave::new(reg.john, day(3), day(5), "Trip", LeaveState::Approved)))
            .unwrap();
        assert_eq!(store.leaves_by_employee(reg.john)[0].days(), 3);
    }
}
