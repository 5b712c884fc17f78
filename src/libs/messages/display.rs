//! Text of every [`Message`].

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::PromptSeed => "Sample data seed".to_string(),
            Message::PromptTrendDays => "Days in the report trend".to_string(),
            Message::PromptDashboardDays => "Days in the dashboard trend".to_string(),
            Message::PromptPageSize => "Records per page".to_string(),
            Message::PromptDefaultRangeDays => "Default report range in days".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(date) => format!("Attendance overview for {}", date),
            Message::TrendTooLong { requested, max } => {
                format!("Trend of {} days is too long, at most {} days are shown", requested, max)
            }
            Message::NoEmployees => "No employees registered".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceHeader => "Attendance records".to_string(),
            Message::NoRecordsFound => "No attendance records found".to_string(),
            Message::PageOutOfRange { requested, last } => {
                format!("Page {} does not exist, showing page {}", requested, last)
            }

            // === REPORT MESSAGES ===
            Message::ReportHeader { from, to } => format!("Attendance report from {} to {}", from, to),
            Message::ReportStatisticsHeader => "Statistics".to_string(),
            Message::InvalidDateRange { from, to } => {
                format!("Start date {} is after end date {}", from, to)
            }

            Message::RangeTooLong(days) => format!("Report range of {} days starts before the earliest supported date", days),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportDirectoryMissing(dir) => format!("Export directory does not exist: {}", dir),
            Message::ExportingRecords(count) => format!("Exporting {} records", count),

            // === ORGANIZATION MESSAGES ===
            Message::EmployeesHeader => "Employees".to_string(),
            Message::DepartmentsHeader => "Departments".to_string(),
            Message::DesignationsHeader => "Designations".to_string(),
            Message::StatusesHeader => "Employee statuses".to_string(),
            Message::LeavesHeader => "Leave requests".to_string(),
            Message::NoLeaves => "No leave requests found".to_string(),

            // === INPUT MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", value),
            Message::UnknownDepartment(name) => format!("Unknown department: {}", name),
        };
        write!(f, "{}", s)
    }
}
