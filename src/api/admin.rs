use crate::{
    auth::basic::AdminUser,
    error::{ApiError, ApiResult},
    model::{all_entry::AllEntry, employee::Employee, user::User},
    models::NewAllEntry,
    utils::db_utils::is_foreign_key_violation,
};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use tracing::{info, warn};

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Authenticated admin", body = AdminUser),
        (status = 401, description = "Missing or wrong credentials", body = Object, example = json!({
            "detail": "Unauthorized"
        }))
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn whoami(admin: AdminUser) -> HttpResponse {
    HttpResponse::Ok().json(admin)
}

#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "Full user rows", body = [User]),
        (status = 401, description = "Missing or wrong credentials")
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn list_user_rows(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let rows = sqlx::query_as::<_, User>(
        "SELECT id, username, email, cell_num, hobby FROM users ORDER BY id",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    get,
    path = "/admin/employees",
    responses(
        (status = 200, description = "Full employee rows", body = [Employee]),
        (status = 401, description = "Missing or wrong credentials")
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn list_employee_rows(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let rows = sqlx::query_as::<_, Employee>(
        "SELECT id, username, email, cell_num, job, user_username FROM employees ORDER BY id",
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    get,
    path = "/admin/all",
    responses(
        (status = 200, description = "Junction rows", body = [AllEntry]),
        (status = 401, description = "Missing or wrong credentials")
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn list_all_entries(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let rows = sqlx::query_as::<_, AllEntry>(
        r#"SELECT id, user_id, employee_id FROM "all" ORDER BY id"#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

/// Link a user and/or employee. Either side may be omitted.
#[utoipa::path(
    post,
    path = "/admin/all",
    request_body = NewAllEntry,
    responses(
        (status = 200, description = "Junction row created", body = AllEntry),
        (status = 401, description = "Missing or wrong credentials"),
        (status = 422, description = "Referenced user or employee does not exist", body = Object)
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn create_all_entry(
    admin: AdminUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewAllEntry>,
) -> ApiResult<HttpResponse> {
    let result = sqlx::query_as::<_, AllEntry>(
        r#"
        INSERT INTO "all" (user_id, employee_id)
        VALUES (?, ?)
        RETURNING id, user_id, employee_id
        "#,
    )
    .bind(payload.user_id)
    .bind(payload.employee_id)
    .fetch_one(pool.get_ref())
    .await;

    match result {
        Ok(entry) => {
            info!(admin = %admin.username, entry_id = entry.id, "Created junction entry");
            Ok(HttpResponse::Ok().json(entry))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            warn!(error = %e, "Junction entry references a missing row");
            Err(ApiError::Validation(
                "Referenced user or employee does not exist".to_string(),
            ))
        }
        Err(e) => Err(e.into()),
    }
}
