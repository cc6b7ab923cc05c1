// src/api/handlers/states.rs
use actix_web::{web, HttpResponse};

use crate::api::AppState;
use crate::database;
use crate::errors::PortalError;
use crate::models::require_positive_id;

/// GET /states - List every state
pub async fn list_states(state: web::Data<AppState>) -> Result<HttpResponse, PortalError> {
    let states = database::list_states(&state.pool).await?;
    Ok(HttpResponse::Ok().json(states))
}

/// GET /states/{state_id} - Get a single state
pub async fn get_state(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, PortalError> {
    let state_id = require_positive_id(path.into_inner(), "stateId")?;

    match database::get_state(&state.pool, state_id).await? {
        Some(found) => Ok(HttpResponse::Ok().json(found)),
        None => Err(state_not_found(state_id)),
    }
}

/// GET /states/{state_id}/stats - Case totals across the state's districts
pub async fn get_state_stats(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, PortalError> {
    let state_id = require_positive_id(path.into_inner(), "stateId")?;

    if database::get_state(&state.pool, state_id).await?.is_none() {
        return Err(state_not_found(state_id));
    }

    let stats = database::get_state_stats(&state.pool, state_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

fn state_not_found(state_id: i64) -> PortalError {
    PortalError::NotFound(format!("State {} not found", state_id))
}
