// src/database.rs
use crate::config::AppConfig;
use crate::models::{District, DistrictPayload, State, StateStats, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

pub async fn init_db(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    connect(&config.database_url, config.max_connections).await
}

/// Opens a pool on `database_url` and applies the embedded migrations.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    // Create parent directory BEFORE attempting to connect
    if let Some(parent) = db_file_path(database_url).and_then(|p| p.parent().map(Path::to_path_buf)) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(&parent).map_err(sqlx::Error::Io)?;
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    log::info!("Connecting to {}", database_url);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database migrations completed");

    Ok(pool)
}

/// File backing a `sqlite:` URL, or `None` for in-memory databases.
fn db_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(Path::new(path))
    }
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

pub async fn get_user_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT username, password FROM user WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn list_states(pool: &SqlitePool) -> Result<Vec<State>, sqlx::Error> {
    sqlx::query_as::<_, State>("SELECT state_id, state_name, population FROM state ORDER BY state_id")
        .fetch_all(pool)
        .await
}

pub async fn get_state(pool: &SqlitePool, state_id: i64) -> Result<Option<State>, sqlx::Error> {
    sqlx::query_as::<_, State>("SELECT state_id, state_name, population FROM state WHERE state_id = ?")
        .bind(state_id)
        .fetch_optional(pool)
        .await
}

/// Sums every counter over the districts of `state_id`. A state without
/// districts yields all zeros.
pub async fn get_state_stats(pool: &SqlitePool, state_id: i64) -> Result<StateStats, sqlx::Error> {
    sqlx::query_as::<_, StateStats>(
        r#"
        SELECT
            COALESCE(SUM(cases), 0) AS total_cases,
            COALESCE(SUM(cured), 0) AS total_cured,
            COALESCE(SUM(active), 0) AS total_active,
            COALESCE(SUM(deaths), 0) AS total_deaths
        FROM district
        WHERE state_id = ?
        "#,
    )
    .bind(state_id)
    .fetch_one(pool)
    .await
}

/// Inserts a district and returns its generated id.
pub async fn create_district(pool: &SqlitePool, district: &DistrictPayload) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&district.district_name)
    .bind(district.state_id)
    .bind(district.cases)
    .bind(district.cured)
    .bind(district.active)
    .bind(district.deaths)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_district(pool: &SqlitePool, district_id: i64) -> Result<Option<District>, sqlx::Error> {
    sqlx::query_as::<_, District>(
        r#"
        SELECT district_id, district_name, state_id, cases, cured, active, deaths
        FROM district
        WHERE district_id = ?
        "#,
    )
    .bind(district_id)
    .fetch_optional(pool)
    .await
}

/// Overwrites all mutable columns. Returns `false` when no row matched.
pub async fn update_district(
    pool: &SqlitePool,
    district_id: i64,
    district: &DistrictPayload,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE district
        SET district_name = ?, state_id = ?, cases = ?, cured = ?, active = ?, deaths = ?
        WHERE district_id = ?
        "#,
    )
    .bind(&district.district_name)
    .bind(district.state_id)
    .bind(district.cases)
    .bind(district.cured)
    .bind(district.active)
    .bind(district.deaths)
    .bind(district_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns `false` when no row existed.
pub async fn delete_district(pool: &SqlitePool, district_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM district WHERE district_id = ?")
        .bind(district_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
