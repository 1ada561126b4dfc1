use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::dashboard::DashboardStats;
use crate::model::employee::{Employee, EmployeeStatus};

/// Overview counters for one day.
///
/// Present counts distinct employees with a present, late or partial record
/// on the day. Average hours only looks at records that logged time.
pub fn compute_stats(
    employees: &[Employee],
    records: &[AttendanceRecord],
    day: NaiveDate,
) -> DashboardStats {
    let todays: Vec<&AttendanceRecord> = records.iter().filter(|r| r.date == day).collect();

    let present_today = todays
        .iter()
        .filter(|r| {
            matches!(
                r.status,
                AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::Partial
            )
        })
        .map(|r| r.employee_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let late_arrivals = todays
        .iter()
        .filter(|r| r.status == AttendanceStatus::Late)
        .count();

    let hours: Vec<f64> = todays
        .iter()
        .filter_map(|r| r.total_hours)
        .filter(|h| *h > 0.0)
        .collect();
    let average_hours = if hours.is_empty() {
        0.0
    } else {
        let mean = hours.iter().sum::<f64>() / hours.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    DashboardStats {
        total_employees: employees.len(),
        present_today,
        on_leave: employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::OnLeave)
            .count(),
        late_arrivals,
        average_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_id: &str, date: &str, hours: Option<f64>, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("{employee_id}-{date}"),
            employee_id: employee_id.to_string(),
            employee_name: format!("Employee {employee_id}"),
            employee_email: format!("e{employee_id}@company.com"),
            clock_in: None,
            clock_out: None,
            date: date.parse().unwrap(),
            total_hours: hours,
            status,
            notes: None,
        }
    }

    fn employee(id: &str, status: EmployeeStatus) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {id}"),
            email: format!("e{id}@company.com"),
            department: "Engineering".to_string(),
            position: "Developer".to_string(),
            avatar: None,
            start_date: "2023-01-01".parse().unwrap(),
            status,
        }
    }

    #[test]
    fn counts_only_the_requested_day() {
        let employees = vec![
            employee("1", EmployeeStatus::Active),
            employee("2", EmployeeStatus::Active),
            employee("3", EmployeeStatus::OnLeave),
            employee("4", EmployeeStatus::Active),
        ];
        let records = vec![
            record("1", "2024-01-15", Some(8.5), AttendanceStatus::Present),
            record("2", "2024-01-15", Some(8.0), AttendanceStatus::Late),
            record("4", "2024-01-15", Some(0.0), AttendanceStatus::Absent),
            record("1", "2024-01-14", Some(6.9), AttendanceStatus::Partial),
        ];

        let stats = compute_stats(&employees, &records, "2024-01-15".parse().unwrap());

        assert_eq!(
            stats,
            DashboardStats {
                total_employees: 4,
                present_today: 2,
                on_leave: 1,
                late_arrivals: 1,
                average_hours: 8.3,
            }
        );
    }

    #[test]
    fn repeated_records_count_one_employee_once() {
        let records = vec![
            record("1", "2024-01-15", Some(4.0), AttendanceStatus::Partial),
            record("1", "2024-01-15", Some(4.0), AttendanceStatus::Partial),
        ];
        let stats = compute_stats(&[], &records, "2024-01-15".parse().unwrap());
        assert_eq!(stats.present_today, 1);
        assert_eq!(stats.average_hours, 4.0);
    }

    #[test]
    fn empty_day_has_zero_average() {
        let stats = compute_stats(&[], &[], "2024-01-15".parse().unwrap());
        assert_eq!(stats.average_hours, 0.0);
        assert_eq!(stats.present_today, 0);
    }
}
