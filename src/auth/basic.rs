use crate::error::ApiError;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, http::header};
use base64::prelude::*;
use futures::future::{Ready, ready};
use serde::Serialize;
use utoipa::ToSchema;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Identity of a request that passed the Basic auth gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminUser {
    #[schema(example = "admin")]
    pub username: String,
}

/// Parses `Authorization: Basic <base64(username:password)>`.
/// Returns `None` for anything that is not well-formed Basic credentials.
pub fn parse_basic_auth_header(value: &str) -> Option<Credentials> {
    let encoded = value.strip_prefix("Basic ")?.trim();
    let decoded = BASE64_STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Stateless check against the fixed admin credentials.
pub fn authenticate(credentials: &Credentials) -> Result<AdminUser, ApiError> {
    let username_ok = credentials.username == ADMIN_USERNAME;
    let password_ok = credentials.password == ADMIN_PASSWORD;

    if username_ok && password_ok {
        Ok(AdminUser {
            username: credentials.username.clone(),
        })
    } else {
        Err(ApiError::Unauthorized)
    }
}

/// Runs the whole gate against a request's headers.
pub fn authenticate_request(req: &HttpRequest) -> Result<AdminUser, ApiError> {
    let credentials = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_basic_auth_header)
        .ok_or(ApiError::Unauthorized)?;

    authenticate(&credentials)
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // set by the middleware when the scope is gated
        if let Some(admin) = req.extensions().get::<AdminUser>() {
            return ready(Ok(admin.clone()));
        }

        ready(authenticate_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn basic(raw: &str) -> String {
        format!("Basic {}", BASE64_STANDARD.encode(raw))
    }

    #[test]
    fn parses_well_formed_header() {
        let creds = parse_basic_auth_header(&basic("admin:password")).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "password");
    }

    #[test]
    fn password_may_contain_colons() {
        let creds = parse_basic_auth_header(&basic("admin:p@ss:word")).unwrap();
        assert_eq!(creds.password, "p@ss:word");
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(parse_basic_auth_header("Bearer abc").is_none());
        assert!(parse_basic_auth_header("Basic !!not-base64!!").is_none());
        assert!(parse_basic_auth_header(&basic("no-colon")).is_none());
    }

    #[test]
    fn only_fixed_credentials_pass() {
        let ok = Credentials {
            username: "admin".to_string(),
            password: "password".to_string(),
        };
        assert_eq!(authenticate(&ok).unwrap().username, "admin");

        let wrong_password = Credentials {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(matches!(authenticate(&wrong_password), Err(ApiError::Unauthorized)));

        let wrong_user = Credentials {
            username: "root".to_string(),
            password: "password".to_string(),
        };
        assert!(matches!(authenticate(&wrong_user), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn request_without_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(authenticate_request(&req), Err(ApiError::Unauthorized)));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, basic("admin:password")))
            .to_http_request();
        assert!(authenticate_request(&req).is_ok());
    }
}
