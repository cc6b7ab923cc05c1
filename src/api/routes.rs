// src/api/routes.rs
use actix_web::middleware::from_fn;
use actix_web::web;

use super::handlers;
use super::middleware::require_bearer;
use crate::errors::PortalError;

/// Registers every route. Expects the app to trim trailing slashes
/// (`middleware::NormalizePath::trim()`), so `/states/` and `/states` match alike.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        PortalError::Validation(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        PortalError::Validation(format!("Invalid path parameter: {}", err)).into()
    }))
    .route("/health", web::get().to(handlers::health_check))
    .route("/login", web::post().to(handlers::login))
    .service(
        web::scope("/states")
            .wrap(from_fn(require_bearer))
            .route("", web::get().to(handlers::list_states))
            .route("/{state_id}", web::get().to(handlers::get_state))
            .route("/{state_id}/stats", web::get().to(handlers::get_state_stats)),
    )
    .service(
        web::scope("/districts")
            .wrap(from_fn(require_bearer))
            .route("", web::post().to(handlers::create_district))
            .route("/{district_id}", web::get().to(handlers::get_district))
            .route("/{district_id}", web::put().to(handlers::update_district))
            .route("/{district_id}", web::delete().to(handlers::delete_district)),
    );
}
