/// Every user-facing message of the application.
///
/// Text lives in the `Display` impl in [`super::display`]; call sites only
/// pick the variant and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleReport,
    PromptSeed,
    PromptTrendDays,
    PromptDashboardDays,
    PromptPageSize,
    PromptDefaultRangeDays,

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String),
    TrendTooLong { requested: u32, max: u32 },
    NoEmployees,

    // === ATTENDANCE MESSAGES ===
    AttendanceHeader,
    NoRecordsFound,
    PageOutOfRange { requested: usize, last: usize },

    // === REPORT MESSAGES ===
    ReportHeader { from: String, to: String },
    ReportStatisticsHeader,
    InvalidDateRange { from: String, to: String },
    RangeTooLong(u32),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportDirectoryMissing(String),
    ExportingRecords(usize),

    // === ORGANIZATION MESSAGES ===
    EmployeesHeader,
    DepartmentsHeader,
    DesignationsHeader,
    StatusesHeader,
    LeavesHeader,
    NoLeaves,

    // === INPUT MESSAGES ===
    InvalidDate(String),
    UnknownDepartment(String),
}
