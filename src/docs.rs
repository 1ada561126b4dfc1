use crate::api::employee::EmployeeListResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::dashboard::DashboardStats;
use crate::model::employee::{Employee, EmployeeStatus};
use crate::models::{
    AttendanceListResponse, AttendanceQuery, AttendanceRecordView, ClockInReqDto, ClockOutResDto,
    DashboardQuery, EmployeeQuery, SessionStateDto,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Dashboard API",
        version = "0.1.0",
        description = r#"
## HRM Dashboard

Backend for a small human-resources dashboard. Attendance is recorded in an
external spreadsheet through its web form endpoint; this service keeps the
open clock-in session and serves the directory snapshot.

### 🔹 Key Features
- **Clock In / Clock Out**
  - One open session per device, resumed after restart
  - Live elapsed time for the running timer
- **Attendance History**
  - Search by employee name or email, filter by day
- **Employee Directory**
  - Search by name, email or department
- **Dashboard**
  - Daily presence, leave, late arrivals and average hours

### 📦 Response Format
- JSON-based RESTful responses
- Errors as `{"message": "..."}`

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::clock_in,
        crate::api::attendance::clock_out,
        crate::api::attendance::session_state,
        crate::api::attendance::cancel_session,
        crate::api::attendance::list_attendance,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,

        crate::api::dashboard::dashboard_stats
    ),
    components(
        schemas(
            ClockInReqDto,
            ClockOutResDto,
            SessionStateDto,
            AttendanceQuery,
            AttendanceRecord,
            AttendanceStatus,
            AttendanceRecordView,
            AttendanceListResponse,
            Employee,
            EmployeeStatus,
            EmployeeQuery,
            EmployeeListResponse,
            DashboardQuery,
            DashboardStats
        )
    ),
    tags(
        (name = "Attendance", description = "Clock in/out and attendance history APIs"),
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Dashboard", description = "Overview statistics APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/attendance",
            "/api/attendance/clock-in",
            "/api/attendance/clock-out",
            "/api/attendance/session",
            "/api/employee",
            "/api/employee/{employee_id}",
            "/api/dashboard/stats",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
