// src/api/state.rs
use crate::auth::TokenKeys;
use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &AppConfig) -> Self {
        Self {
            pool,
            tokens: Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_secs)),
        }
    }
}
