// src/api/handlers/districts.rs
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{web, HttpResponse};

use crate::api::AppState;
use crate::auth::AuthenticatedUser;
use crate::database;
use crate::errors::PortalError;
use crate::models::{require_positive_id, DistrictPayload};

/// POST /districts - Add a district
pub async fn create_district(
    state: web::Data<AppState>,
    user: web::ReqData<AuthenticatedUser>,
    req: web::Json<DistrictPayload>,
) -> Result<HttpResponse, PortalError> {
    let district = req.into_inner();
    district.validate()?;

    let district_id = database::create_district(&state.pool, &district)
        .await
        .map_err(|e| unknown_state(e, district.state_id))?;
    log::info!("{} added district {} ({})", user.username, district_id, district.district_name);

    Ok(HttpResponse::Ok()
        .insert_header((LOCATION, format!("/districts/{}/", district_id)))
        .content_type(ContentType::plaintext())
        .body("District Successfully Added"))
}

/// GET /districts/{district_id} - Get a single district
pub async fn get_district(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, PortalError> {
    let district_id = require_positive_id(path.into_inner(), "districtId")?;

    match database::get_district(&state.pool, district_id).await? {
        Some(district) => Ok(HttpResponse::Ok().json(district)),
        None => Err(district_not_found(district_id)),
    }
}

/// PUT /districts/{district_id} - Replace every field of a district
pub async fn update_district(
    state: web::Data<AppState>,
    user: web::ReqData<AuthenticatedUser>,
    path: web::Path<i64>,
    req: web::Json<DistrictPayload>,
) -> Result<HttpResponse, PortalError> {
    let district_id = require_positive_id(path.into_inner(), "districtId")?;
    let district = req.into_inner();
    district.validate()?;

    let updated = database::update_district(&state.pool, district_id, &district)
        .await
        .map_err(|e| unknown_state(e, district.state_id))?;
    if !updated {
        return Err(district_not_found(district_id));
    }
    log::info!("{} updated district {}", user.username, district_id);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("District Details Updated"))
}

/// DELETE /districts/{district_id} - Remove a district
pub async fn delete_district(
    state: web::Data<AppState>,
    user: web::ReqData<AuthenticatedUser>,
    path: web::Path<i64>,
) -> Result<HttpResponse, PortalError> {
    let district_id = require_positive_id(path.into_inner(), "districtId")?;

    if !database::delete_district(&state.pool, district_id).await? {
        return Err(district_not_found(district_id));
    }
    log::info!("{} removed district {}", user.username, district_id);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("District Removed"))
}

fn district_not_found(district_id: i64) -> PortalError {
    PortalError::NotFound(format!("District {} not found", district_id))
}

/// A foreign-key failure means `stateId` names no state; anything else is internal.
fn unknown_state(err: sqlx::Error, state_id: i64) -> PortalError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return PortalError::Validation(format!(
                "stateId {} does not reference a known state",
                state_id
            ));
        }
    }
    PortalError::Database(err)
}
