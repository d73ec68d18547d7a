use crate::{
    error::{ApiError, ApiResult},
    model::kind::EntityKind,
    models::{EmployeeSummary, NewEmployee},
    utils::registration::register,
};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use tracing::debug;

/// Create Employee
#[utoipa::path(
    post,
    path = "/employee/",
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (status = 400, description = "Email or username already in use", body = Object, example = json!({
            "detail": "Employee with this email already exists"
        })),
        (status = 422, description = "Malformed payload or unknown user_username", body = Object)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewEmployee>,
) -> ApiResult<HttpResponse> {
    let employee = register(pool.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

#[utoipa::path(
    get,
    path = "/employees/",
    responses(
        (status = 200, description = "Username and job of every employee", body = [EmployeeSummary])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let employees =
        sqlx::query_as::<_, EmployeeSummary>("SELECT username, job FROM employees ORDER BY id")
            .fetch_all(pool.get_ref())
            .await?;

    debug!(count = employees.len(), "Listed employees");
    Ok(HttpResponse::Ok().json(employees))
}

#[utoipa::path(
    get,
    path = "/employees/{username}",
    params(
        ("username", Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeSummary),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let username = path.into_inner();

    sqlx::query_as::<_, EmployeeSummary>("SELECT username, job FROM employees WHERE username = ?")
        .bind(&username)
        .fetch_optional(pool.get_ref())
        .await?
        .map(|employee| HttpResponse::Ok().json(employee))
        .ok_or(ApiError::NotFound(EntityKind::Employee))
}
