// src/api/middleware.rs
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::middleware::Next;
use actix_web::{web, Error, HttpMessage, ResponseError};

use crate::api::AppState;
use crate::auth::{extract_bearer_token, AuthenticatedUser};
use crate::errors::PortalError;

/// Rejects requests without a valid bearer token and attaches the caller's
/// identity to the request extensions otherwise.
pub async fn require_bearer<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    match authenticate(&req) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
        Err(err) => {
            log::debug!("Rejected {} {}: {}", req.method(), req.path(), err);
            let response = err.error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, PortalError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| PortalError::Config("AppState is not registered".to_string()))?;

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or(PortalError::Unauthorized)?;

    let claims = state.tokens.verify(token)?;
    Ok(AuthenticatedUser { username: claims.username })
}
