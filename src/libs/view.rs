use super::aggregate::{DepartmentCount, StatusCounts};
use super::dashboard::DashboardSummary;
use super::filter::Page;
use super::formatter::{format_duration, format_percent, ReportRow, EMPTY_CELL};
use super::report::ReportSummary;
use crate::db::attendance::AttendanceStatus;
use crate::db::store::Store;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn records(rows: &[ReportRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "DEPARTMENT", "DATE", "CHECK-IN", "CHECK-OUT", "STATUS", "WORK HOURS"]);
        for r in rows {
            table.add_row(row![r.employee, r.department, r.date, r.check_in, r.check_out, r.status, r.work_hours]);
        }
        table.printstd();

        Ok(())
    }

    pub fn page(page: &Page<ReportRow>) -> Result<()> {
        Self::records(&page.items)?;
        println!(
            "Showing {} to {} of {} records (page {} of {})",
            page.first_index(),
            page.last_index(),
            page.total_items,
            page.page,
            page.total_pages
        );

        Ok(())
    }

    pub fn statistics(summary: &ReportSummary, departments: &[DepartmentCount], trend: &[(NaiveDate, StatusCounts)], worked: Duration) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["RECORDS", "ATTENDANCE", "HOURS WORKED"]);
        table.add_row(row![summary.total, format_percent(summary.attendance_rate), format_duration(&worked)]);
        table.printstd();

        let mut statuses = Table::new();
        statuses.add_row(row!["STATUS", "RECORDS", "SHARE"]);
        for status in AttendanceStatus::ALL {
            statuses.add_row(row![
                status,
                summary.status_counts.get(status),
                format_percent(summary.status_rate(status))
            ]);
        }
        statuses.printstd();

        let top = summary
            .top_department
            .as_ref()
            .map_or_else(|| EMPTY_CELL.to_string(), |d| format!("{} ({})", d.name, d.count));
        let peak = summary
            .peak_day
            .map_or_else(|| EMPTY_CELL.to_string(), |(date, counts)| format!("{} ({} present)", date.format("%b %-d, %Y"), counts.present));
        println!("Top department: {}", top);
        println!("Peak attendance day: {}", peak);

        println!("\nBy department:");
        Self::department_counts(departments, "RECORDS")?;

        println!("\nDaily trend:");
        Self::trend(trend, "%m/%d")?;

        Ok(())
    }

    pub fn dashboard(summary: &DashboardSummary) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["EMPLOYEES", "ACTIVE", "PRESENT", "LATE", "ABSENT", "ATTENDANCE"]);
        table.add_row(row![
            summary.total_employees,
            summary.active_employees,
            summary.today.present,
            summary.today.late,
            summary.today.absent,
            format!("{}%", summary.attendance_rate)
        ]);
        table.printstd();

        println!("\nAttendance trend:");
        Self::trend(&summary.trend, "%a %m/%d")?;

        println!("\nEmployees by department:");
        Self::department_counts(&summary.department_distribution, "EMPLOYEES")?;

        println!("\nWork hours:");
        let mut hours = Table::new();
        hours.add_row(row!["HOURS", "RECORDS"]);
        for bucket in &summary.work_hours {
            hours.add_row(row![bucket.label, bucket.employees]);
        }
        hours.printstd();

        Ok(())
    }

    pub fn employees(store: &Store) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "DEPARTMENT", "DESIGNATION", "JOINED", "STATUS", "LEAVES LEFT"]);
        for e in store.employees() {
            table.add_row(row![
                e.id,
                e.name,
                e.email,
                store.department_name(e.department_id).unwrap_or(EMPTY_CELL),
                store.designation(e.designation_id).map_or(EMPTY_CELL, |d| d.name.as_str()),
                e.join_date,
                e.status,
                format!("{}/{}", e.remaining_leaves, e.total_leaves)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn leaves(store: &Store) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE", "FROM", "TO", "DAYS", "REASON", "STATE"]);
        for l in store.leaves() {
            table.add_row(row![
                l.id,
                store.employee(l.employee_id).map_or(EMPTY_CELL, |e| e.name.as_str()),
                l.start_date,
                l.end_date,
                l.days(),
                l.reason,
                l.state
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn departments(store: &Store) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DEPARTMENT", "DESIGNATIONS", "EMPLOYEES"]);
        for d in store.departments() {
            let designations = store.designations().iter().filter(|g| g.department_id == d.id).count();
            let employees = store.employees().iter().filter(|e| e.department_id == d.id).count();
            table.add_row(row![d.id, d.name, designations, employees]);
        }
        table.printstd();

        Ok(())
    }

    pub fn designations(store: &Store) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESIGNATION", "DEPARTMENT"]);
        for d in store.designations() {
            table.add_row(row![d.id, d.name, store.department_name(d.department_id).unwrap_or(EMPTY_CELL)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn statuses(store: &Store) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "STATUS", "COLOR"]);
        for s in store.statuses() {
            table.add_row(row![s.id, s.name, s.color]);
        }
        table.printstd();

        Ok(())
    }

    fn department_counts(departments: &[DepartmentCount], header: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DEPARTMENT", header]);
        for d in departments {
            table.add_row(row![d.name, d.count]);
        }
        table.printstd();

        Ok(())
    }

    fn trend(trend: &[(NaiveDate, StatusCounts)], date_format: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PRESENT", "LATE", "ABSENT"]);
        for (date, counts) in trend {
            table.add_row(row![date.format(date_format), counts.present, counts.late, counts.absent]);
        }
        table.printstd();

        Ok(())
    }
}
