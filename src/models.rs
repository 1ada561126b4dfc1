use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::attendance::AttendanceRecord;

#[derive(Deserialize, ToSchema)]
pub struct ClockInReqDto {
    #[schema(example = "Deepak Dash")]
    pub name: String,
    #[schema(example = "deepak.dash@company.com", format = "email")]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "running",
    "employee_name": "Deepak Dash",
    "employee_email": "deepak.dash@company.com",
    "clock_in": "2024-01-15T09:00:00.000Z",
    "clock_in_display": "09:00 AM",
    "elapsed": "02:30:00",
    "elapsed_seconds": 9000,
    "today": "Monday, January 15, 2024"
}))]
pub struct SessionStateDto {
    /// `idle` or `running`
    pub status: String,
    pub employee_name: Option<String>,
    pub employee_email: Option<String>,
    pub clock_in: Option<String>,
    pub clock_in_display: Option<String>,
    pub elapsed: Option<String>,
    pub elapsed_seconds: Option<u64>,
    pub today: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "message": "Thank you Deepak Dash! You worked 2.50 hours today.",
    "employee_name": "Deepak Dash",
    "clock_in": "2024-01-15T09:00:00.000Z",
    "clock_out": "2024-01-15T11:30:00.000Z",
    "total_hours": 2.5
}))]
pub struct ClockOutResDto {
    pub message: String,
    pub employee_name: String,
    pub clock_in: String,
    pub clock_out: String,
    pub total_hours: f64,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Case-insensitive match on employee name or email
    pub search: Option<String>,
    /// Exact day, `YYYY-MM-DD`
    #[schema(example = "2024-01-15")]
    pub date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceRecordView {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    #[schema(example = "09:00 AM")]
    pub clock_in_display: String,
    #[schema(example = "05:30 PM")]
    pub clock_out_display: String,
    #[schema(example = "Mon, Jan 15")]
    pub date_display: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub data: Vec<AttendanceRecordView>,
    #[schema(example = 1)]
    pub total: usize,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Case-insensitive match on name, email or department
    pub search: Option<String>,
    /// `active`, `inactive` or `on-leave`
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Day to summarise, `YYYY-MM-DD`; today (UTC) when absent
    #[schema(example = "2024-01-15")]
    pub date: Option<String>,
}
