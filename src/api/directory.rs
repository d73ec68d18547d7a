use crate::{
    error::ApiResult,
    models::{MessageResponse, UsernameEntry},
};
use actix_web::{HttpResponse, Responder, get, web};
use sqlx::SqlitePool;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "Directory"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Hello, World!".to_string(),
    })
}

/// Usernames across users and employees, each listed once.
#[utoipa::path(
    get,
    path = "/all/",
    responses(
        (status = 200, description = "Union of user and employee usernames", body = [UsernameEntry])
    ),
    tag = "Directory"
)]
pub async fn list_all_usernames(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let entries = sqlx::query_as::<_, UsernameEntry>(
        r#"
        SELECT username FROM users
        UNION
        SELECT username FROM employees
        ORDER BY username
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}
