use crate::{
    api::parse_date_param,
    attendance::manager::ClockSessionManager,
    directory::Directory,
    model::session::ClockState,
    models::{
        AttendanceListResponse, AttendanceQuery, AttendanceRecordView, ClockInReqDto,
        ClockOutResDto, SessionStateDto,
    },
    utils::{
        record_filter::{RecordFilter, filter_records},
        time_format::{format_calendar_date, format_clock_time, format_long_date},
    },
};
use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use tracing::debug;

fn iso(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn session_state_dto(manager: &ClockSessionManager) -> SessionStateDto {
    let now = manager.now();
    let today = format_long_date(now.with_timezone(&Local).date_naive());

    match (manager.state(), manager.current_elapsed(now)) {
        (ClockState::Running(session), Ok(worked)) => SessionStateDto {
            status: "running".into(),
            clock_in: Some(iso(session.clock_in_at)),
            clock_in_display: Some(format_clock_time(Some(
                session.clock_in_at.with_timezone(&Local).naive_local(),
            ))),
            elapsed: Some(worked.to_string()),
            elapsed_seconds: Some(worked.total_seconds()),
            employee_name: Some(session.identity.name),
            employee_email: Some(session.identity.email),
            today,
        },
        _ => SessionStateDto {
            status: "idle".into(),
            employee_name: None,
            employee_email: None,
            clock_in: None,
            clock_in_display: None,
            elapsed: None,
            elapsed_seconds: None,
            today,
        },
    }
}

/// Clock in
#[utoipa::path(
    post,
    path = "/api/attendance/clock-in",
    request_body = ClockInReqDto,
    responses(
        (status = 200, description = "Clocked in successfully", body = SessionStateDto),
        (status = 400, description = "Name or email missing", body = Object, example = json!({
            "message": "Please enter your name and email before clocking in"
        })),
        (status = 409, description = "Already clocked in", body = Object, example = json!({
            "message": "Already clocked in"
        })),
        (status = 502, description = "Attendance sheet did not record the event", body = Object, example = json!({
            "message": "Could not record attendance, please try again"
        }))
    ),
    tag = "Attendance"
)]
pub async fn clock_in(
    manager: web::Data<ClockSessionManager>,
    payload: web::Json<ClockInReqDto>,
) -> actix_web::Result<impl Responder> {
    manager.clock_in(&payload.name, &payload.email).await?;

    Ok(HttpResponse::Ok().json(session_state_dto(&manager)))
}

/// Clock out
#[utoipa::path(
    post,
    path = "/api/attendance/clock-out",
    responses(
        (status = 200, description = "Clocked out successfully", body = ClockOutResDto),
        (status = 409, description = "Not clocked in", body = Object, example = json!({
            "message": "Not clocked in"
        })),
        (status = 502, description = "Attendance sheet did not record the event", body = Object, example = json!({
            "message": "Could not record attendance, please try again"
        }))
    ),
    tag = "Attendance"
)]
pub async fn clock_out(
    manager: web::Data<ClockSessionManager>,
) -> actix_web::Result<impl Responder> {
    let summary = manager.clock_out().await?;
    let name = summary.session.identity.name.clone();

    Ok(HttpResponse::Ok().json(ClockOutResDto {
        message: format!(
            "Thank you {}! You worked {:.2} hours today.",
            name, summary.total_hours
        ),
        employee_name: name,
        clock_in: iso(summary.session.clock_in_at),
        clock_out: iso(summary.clock_out_at),
        total_hours: summary.total_hours,
    }))
}

/// Current clock state, polled by the live timer
#[utoipa::path(
    get,
    path = "/api/attendance/session",
    responses(
        (status = 200, description = "Idle or running session with elapsed time", body = SessionStateDto)
    ),
    tag = "Attendance"
)]
pub async fn session_state(manager: web::Data<ClockSessionManager>) -> impl Responder {
    HttpResponse::Ok().json(session_state_dto(&manager))
}

/// Discard the open session without recording a clock-out
#[utoipa::path(
    delete,
    path = "/api/attendance/session",
    responses(
        (status = 200, description = "Session discarded", body = Object, example = json!({
            "message": "Session cancelled"
        })),
        (status = 409, description = "Not clocked in", body = Object, example = json!({
            "message": "Not clocked in"
        }))
    ),
    tag = "Attendance"
)]
pub async fn cancel_session(
    manager: web::Data<ClockSessionManager>,
) -> actix_web::Result<impl Responder> {
    manager.cancel().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Session cancelled"
    })))
}

/// Attendance history
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Matching records in sheet order", body = AttendanceListResponse),
        (status = 400, description = "Malformed date", body = Object, example = json!({
            "message": "date must be YYYY-MM-DD"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    directory: web::Data<Directory>,
    query: web::Query<AttendanceQuery>,
) -> actix_web::Result<impl Responder> {
    let filter = RecordFilter {
        search: query.search.clone(),
        date: parse_date_param(query.date.as_deref())?,
    };
    debug!(search = ?filter.search, date = ?filter.date, "Filtering attendance records");

    let data: Vec<AttendanceRecordView> = filter_records(&directory.records, &filter)
        .into_iter()
        .map(|record| AttendanceRecordView {
            clock_in_display: format_clock_time(record.clock_in),
            clock_out_display: match record.clock_out {
                Some(t) => format_clock_time(Some(t)),
                None => "Not clocked out".to_string(),
            },
            date_display: format_calendar_date(Some(record.date)),
            record: record.clone(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        total: data.len(),
        data,
    }))
}
