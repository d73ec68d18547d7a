use crate::{
    error::{ApiError, ApiResult},
    model::kind::EntityKind,
    models::{NewUser, UserSummary},
    utils::registration::register,
};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use tracing::debug;

/// Create User
#[utoipa::path(
    post,
    path = "/user/",
    request_body = NewUser,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Email or username already in use", body = Object, example = json!({
            "detail": "User with this email already exists"
        })),
        (status = 422, description = "Malformed payload", body = Object)
    ),
    tag = "User"
)]
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewUser>,
) -> ApiResult<HttpResponse> {
    let user = register(pool.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// List Users
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "Username and hobby of every user", body = [UserSummary])
    ),
    tag = "User"
)]
pub async fn list_users(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let users = sqlx::query_as::<_, UserSummary>("SELECT username, hobby FROM users ORDER BY id")
        .fetch_all(pool.get_ref())
        .await?;

    debug!(count = users.len(), "Listed users");
    Ok(HttpResponse::Ok().json(users))
}

/// Get User by username
#[utoipa::path(
    get,
    path = "/users/{username}",
    params(
        ("username", Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User found", body = UserSummary),
        (status = 404, description = "User not found", body = Object, example = json!({
            "detail": "User not found"
        }))
    ),
    tag = "User"
)]
pub async fn get_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let username = path.into_inner();

    let user = sqlx::query_as::<_, UserSummary>(
        "SELECT username, hobby FROM users WHERE username = ?",
    )
    .bind(&username)
    .fetch_optional(pool.get_ref())
    .await?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ApiError::NotFound(EntityKind::User)),
    }
}
