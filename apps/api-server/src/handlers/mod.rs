//! HTTP handlers and route configuration.

mod health;
pub mod posts;

use actix_web::{HttpRequest, error::JsonPayloadError, web};

use crate::middleware::error::AppError;

/// Turn body parse failures into problem-details 400s.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::get))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::delete().to(posts::delete)),
        );
}
