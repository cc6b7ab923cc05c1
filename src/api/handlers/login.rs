// src/api/handlers/login.rs
use actix_web::{web, HttpResponse};

use crate::api::AppState;
use crate::auth::verify_password;
use crate::database;
use crate::errors::PortalError;
use crate::models::{LoginRequest, LoginResponse};

/// POST /login - Exchange a username and password for a bearer token
pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, PortalError> {
    let LoginRequest { username, password } = req.into_inner();

    let user = database::get_user_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| {
            log::warn!("Login attempt for unknown user: {}", username);
            PortalError::InvalidUser
        })?;

    // bcrypt is CPU-bound; keep it off the async workers.
    let password_hash = user.password;
    let matched = web::block(move || verify_password(&password, &password_hash)).await??;
    if !matched {
        log::warn!("Invalid password for user: {}", username);
        return Err(PortalError::InvalidPassword);
    }

    let jwt_token = state.tokens.issue(&username)?;
    log::info!("User logged in: {}", username);

    Ok(HttpResponse::Ok().json(LoginResponse { jwt_token }))
}
