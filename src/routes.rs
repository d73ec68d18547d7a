use crate::{
    api::{admin, directory, employee, user},
    auth::middleware::basic_auth_middleware,
    docs::ApiDoc,
    error::json_error_handler,
};
use actix_web::{middleware::from_fn, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Paths are registered without trailing slashes; the app is wrapped in
/// `NormalizePath::trim()` so `/user/` and `/user` land on the same route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Public routes
    cfg.service(directory::index)
        .service(web::resource("/user").route(web::post().to(user::create_user)))
        .service(web::resource("/users").route(web::get().to(user::list_users)))
        .service(web::resource("/users/{username}").route(web::get().to(user::get_user)))
        .service(web::resource("/employee").route(web::post().to(employee::create_employee)))
        .service(web::resource("/employees").route(web::get().to(employee::list_employees)))
        .service(
            web::resource("/employees/{username}").route(web::get().to(employee::get_employee)),
        )
        .service(web::resource("/all").route(web::get().to(directory::list_all_usernames)));

    // Admin routes, Basic auth
    cfg.service(
        web::scope("/admin")
            .wrap(from_fn(basic_auth_middleware))
            .service(web::resource("").route(web::get().to(admin::whoami)))
            .service(web::resource("/users").route(web::get().to(admin::list_user_rows)))
            .service(web::resource("/employees").route(web::get().to(admin::list_employee_rows)))
            .service(
                web::resource("/all")
                    .route(web::get().to(admin::list_all_entries))
                    .route(web::post().to(admin::create_all_entry)),
            ),
    );
}

/// Swagger UI and the OpenAPI document. `/swagger-ui/` is trimmed to
/// `/swagger-ui`, which the UI's own wildcard route does not match.
pub fn configure_docs(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/swagger-ui", "/swagger-ui/index.html"))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
        );
}
