use serde::Serialize;
use utoipa::ToSchema;

/// Summary counters for the overview page. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({
    "total_employees": 24,
    "present_today": 18,
    "on_leave": 3,
    "late_arrivals": 2,
    "average_hours": 8.2
}))]
pub struct DashboardStats {
    pub total_employees: usize,
    pub present_today: usize,
    pub on_leave: usize,
    pub late_arrivals: usize,
    pub average_hours: f64,
}
