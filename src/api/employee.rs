use crate::{
    directory::Directory,
    model::employee::{Employee, EmployeeStatus},
    models::EmployeeQuery,
    utils::record_filter::filter_employees,
};
use actix_web::{HttpResponse, Responder, error::ErrorBadRequest, web};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(
    example = json!([{
        "id": "1",
        "name": "Deepak Dash",
        "email": "deepakdash1@company.com",
        "department": "Engineering",
        "position": "Senior Developer",
        "start_date": "2023-01-15",
        "status": "active"
    }])
)]
    pub data: Vec<Employee>,
    #[schema(example = 5)]
    pub total: usize,
}

// -------------------- Handler --------------------

#[utoipa::path(
    get,
    path = "/api/employee",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Employee directory", body = EmployeeListResponse),
        (status = 400, description = "Unknown status", body = Object, example = json!({
            "message": "status must be one of active, inactive, on-leave"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    directory: web::Data<Directory>,
    query: web::Query<EmployeeQuery>,
) -> actix_web::Result<impl Responder> {
    let status = match query.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<EmployeeStatus>().map_err(|_| {
            ErrorBadRequest(json!({
                "message": "status must be one of active, inactive, on-leave"
            }))
        })?),
    };
    debug!(search = ?query.search, status = ?status, "Searching employees");

    let data: Vec<Employee> = filter_employees(&directory.employees, query.search.as_deref(), status)
        .into_iter()
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        total: data.len(),
        data,
    }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    directory: web::Data<Directory>,
    path: web::Path<String>,
) -> impl Responder {
    let employee_id = path.into_inner();

    match directory.employee(&employee_id) {
        Some(emp) => HttpResponse::Ok().json(emp),
        None => HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })),
    }
}
