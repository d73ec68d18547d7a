use crate::auth::basic::AdminUser;
use crate::model::{all_entry::AllEntry, employee::Employee, user::User};
use crate::models::{
    EmployeeSummary, MessageResponse, NewAllEntry, NewEmployee, NewUser, UserSummary,
    UsernameEntry,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "People Registry API",
        version = "1.0.0",
        description = r#"
## People Registry

Registers **users** and **employees**, each with a unique username and a
unique, lowercased email address.

- `POST /user/`, `POST /employee/` create records; duplicates are rejected
  with `400` and a `detail` message.
- `GET /users/`, `GET /employees/`, `GET /all/` list projections.
- `/admin` exposes full table rows behind **HTTP Basic** authentication.

Errors are returned as `{"detail": "..."}`.
"#,
    ),
    paths(
        crate::api::directory::index,
        crate::api::directory::list_all_usernames,

        crate::api::user::create_user,
        crate::api::user::list_users,
        crate::api::user::get_user,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,

        crate::api::admin::whoami,
        crate::api::admin::list_user_rows,
        crate::api::admin::list_employee_rows,
        crate::api::admin::list_all_entries,
        crate::api::admin::create_all_entry
    ),
    components(
        schemas(
            NewUser,
            NewEmployee,
            NewAllEntry,
            User,
            Employee,
            AllEntry,
            UserSummary,
            EmployeeSummary,
            UsernameEntry,
            MessageResponse,
            AdminUser
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Directory", description = "Greeting and cross-table listings"),
        (name = "User", description = "User registration and lookup"),
        (name = "Employee", description = "Employee registration and lookup"),
        (name = "Admin", description = "Raw table access, Basic auth"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in ["/user/", "/users/{username}", "/all/", "/admin/all"] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }

        let schemes = &doc.components.unwrap().security_schemes;
        assert!(schemes.contains_key("basic_auth"));
    }
}
