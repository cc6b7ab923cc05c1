// src/config.rs
use crate::errors::{PortalError, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:covid19IndiaPortal.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// HMAC secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds. `None` issues tokens without an expiry.
    pub token_ttl_secs: Option<i64>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| PortalError::Config("JWT_SECRET must be set".to_string()))?;

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS")?.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(PortalError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
        }

        let token_ttl_secs: Option<i64> = parse_var(&lookup, "JWT_TTL_SECS")?;
        if matches!(token_ttl_secs, Some(ttl) if ttl <= 0) {
            return Err(PortalError::Config("JWT_TTL_SECS must be positive".to_string()));
        }

        Ok(AppConfig {
            database_url,
            jwt_secret,
            token_ttl_secs,
            host,
            port,
            max_connections,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| PortalError::Config(format!("{} has an invalid value '{}': {}", key, raw, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_only_secret_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.token_ttl_secs, None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "   ")])).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_TTL_SECS", "3600"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.token_ttl_secs, Some(3600));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s"), ("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s"), ("JWT_TTL_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("JWT_TTL_SECS"));

        let err = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s"), ("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }
}
