use crate::auth::basic::authenticate_request;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
};
use tracing::info;

/// Gates a scope behind HTTP Basic auth. Rejections short-circuit with 401
/// and a `WWW-Authenticate: Basic` challenge.
pub async fn basic_auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let admin = match authenticate_request(req.request()) {
        Ok(admin) => admin,
        Err(e) => {
            info!(path = %req.path(), "Rejected admin request");
            let resp = e.error_response();
            return Ok(req.into_response(resp));
        }
    };

    req.extensions_mut().insert(admin);

    next.call(req).await
}
