use crate::model::kind::EntityKind;
use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::JsonPayloadError,
    http::{StatusCode, header},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every rejection a handler can produce. Rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} with this email already exists")]
    DuplicateEmail(EntityKind),

    #[error("This username is taken")]
    DuplicateUsername,

    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal Server Error")]
    Database(#[from] sqlx::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DuplicateEmail(_) | ApiError::DuplicateUsername => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(e) = self {
            error!(error = %e, "Database error");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if matches!(self, ApiError::Unauthorized) {
            builder.insert_header((header::WWW_AUTHENTICATE, "Basic"));
        }

        builder.json(json!({ "detail": self.to_string() }))
    }
}

/// Turns body deserialization failures into the same `{"detail": ...}` shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}
