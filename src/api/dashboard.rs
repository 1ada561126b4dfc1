use crate::{
    api::parse_date_param,
    attendance::manager::ClockSessionManager,
    directory::Directory,
    models::DashboardQuery,
    utils::dashboard_stats::compute_stats,
};
use actix_web::{HttpResponse, Responder, web};
use tracing::debug;

/// Overview counters for one day
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Counters derived from the attendance snapshot", body = DashboardStats),
        (status = 400, description = "Malformed date", body = Object, example = json!({
            "message": "date must be YYYY-MM-DD"
        }))
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_stats(
    directory: web::Data<Directory>,
    manager: web::Data<ClockSessionManager>,
    query: web::Query<DashboardQuery>,
) -> actix_web::Result<impl Responder> {
    let day = parse_date_param(query.date.as_deref())?
        .unwrap_or_else(|| manager.now().date_naive());
    debug!(%day, "Computing dashboard stats");

    let stats = compute_stats(&directory.employees, &directory.records, day);
    Ok(HttpResponse::Ok().json(stats))
}
