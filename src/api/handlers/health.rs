// src/api/handlers/health.rs
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::api::AppState;
use crate::database;
use crate::errors::PortalError;

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, PortalError> {
    database::ping(&state.pool).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "covid-portal",
        "version": env!("CARGO_PKG_VERSION")
    })))
}
