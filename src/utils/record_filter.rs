use chrono::NaiveDate;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::{Employee, EmployeeStatus};

#[derive(Debug, Default, Clone)]
pub struct RecordFilter {
    pub search: Option<String>,
    pub date: Option<NaiveDate>,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lowercased search text, or `None` when there is nothing to match on.
fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Records whose name or email contains the search text (case-insensitive)
/// and whose date equals the requested one. Input order is kept.
pub fn filter_records<'a>(
    records: &'a [AttendanceRecord],
    filter: &RecordFilter,
) -> Vec<&'a AttendanceRecord> {
    let search = normalize_search(filter.search.as_deref());

    records
        .iter()
        .filter(|r| match &search {
            Some(s) => contains_ci(&r.employee_name, s) || contains_ci(&r.employee_email, s),
            None => true,
        })
        .filter(|r| filter.date.is_none_or(|d| r.date == d))
        .collect()
}

/// Directory search over name, email and department.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    search: Option<&str>,
    status: Option<EmployeeStatus>,
) -> Vec<&'a Employee> {
    let search = normalize_search(search);

    employees
        .iter()
        .filter(|e| match &search {
            Some(s) => {
                contains_ci(&e.name, s) || contains_ci(&e.email, s) || contains_ci(&e.department, s)
            }
            None => true,
        })
        .filter(|e| status.is_none_or(|st| e.status == st))
        .collect()
}
