//! Selection, ordering and paging of attendance records.
//!
//! [`RecordFilter`] holds optional criteria. An absent criterion (or an empty
//! string) matches every record, so the default filter is the identity:
//!
//! ```rust
//! use presence::libs::filter::{filter, RecordFilter};
//!
//! let records = Vec::new();
//! assert_eq!(filter(&records, &RecordFilter::default()), records);
//! ```
//!
//! Filtering keeps the input order. Callers that need the list order used by
//! the attendance screens sort explicitly with [`sort_newest_first`].

use crate::db::attendance::{AttendanceRecord, AttendanceStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Number of rows per page on the attendance list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact, case-sensitive department name.
    pub department: Option<String>,
    pub status: Option<AttendanceStatus>,
    /// Inclusive lower bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub date_to: Option<NaiveDate>,
    /// Exact day.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring of the employee name.
    pub search: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn between(mut self, date_from: NaiveDate, date_to: NaiveDate) -> Self {
        self.date_from = Some(date_from);
        self.date_to = Some(date_to);
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    /// `true` when the record satisfies every criterion that is set.
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let department = match non_empty(&self.department) {
            Some(department) => record.department == department,
            None => true,
        };
        let status = self.status.map_or(true, |status| record.status == status);
        let from = self.date_from.map_or(true, |from| record.date >= from);
        let to = self.date_to.map_or(true, |to| record.date <= to);
        let day = self.date.map_or(true, |date| record.date == date);
        let search = match non_empty(&self.search) {
            Some(term) => record.employee_name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        };

        department && status && from && to && day && search
    }

    /// `true` when no criterion is set.
    pub fn is_open(&self) -> bool {
        non_empty(&self.department).is_none()
            && self.status.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.date.is_none()
            && non_empty(&self.search).is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Copies the matching records, keeping their order.
pub fn filter(records: &[AttendanceRecord], criteria: &RecordFilter) -> Vec<AttendanceRecord> {
    records.iter().filter(|r| criteria.matches(r)).cloned().collect()
}

/// Borrows the matching records, keeping their order.
pub fn select<'a>(records: &'a [AttendanceRecord], criteria: &RecordFilter) -> Vec<&'a AttendanceRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Orders records newest day first, then by employee name.
///
/// Names compare case-insensitively; the raw name breaks remaining ties so
/// the order is total.
pub fn sort_newest_first<R: Borrow<AttendanceRecord>>(records: &mut [R]) {
    records.sort_by(|a, b| {
        let (a, b) = (a.borrow(), b.borrow());
        b.date.cmp(&a.date).then_with(|| compare_names(&a.employee_name, &b.employee_name))
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// One page of a longer list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually shown.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first item shown, 0 for an empty list.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-based position of the last item shown, 0 for an empty list.
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }
}

/// Cuts `items` into pages of `per_page` and returns page `page`.
///
/// The page number is clamped into `1..=total_pages`. An empty list has a
/// single, empty page. A zero page size is treated as one.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let items = items.get(start..end).map(|slice| slice.to_vec()).unwrap_or_default();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
