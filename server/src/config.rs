// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

/// Environment variable names the database connection string is read from,
/// in order; the first one present wins.
const DATABASE_URL_VARS: &[&str] = &["DATABASE_URL", "DB_URL", "POSTGRES_URL"];

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("PORT")
      .unwrap_or_else(|_| "5000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

    let database_url = DATABASE_URL_VARS
      .iter()
      .find_map(|name| env::var(name).ok())
      .ok_or_else(|| {
        AppError::Config(format!(
          "Missing database connection string (none of {} set)",
          DATABASE_URL_VARS.join(", ")
        ))
      })?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Env vars are process-global state; serialize any test that touches them.
  #[test]
  #[serial_test::serial]
  fn first_present_database_url_variable_wins() {
    env::set_var("DB_URL", "postgres://db-url");
    env::set_var("POSTGRES_URL", "postgres://postgres-url");
    env::remove_var("DATABASE_URL");

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.database_url, "postgres://db-url");

    env::set_var("DATABASE_URL", "postgres://database-url");
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.database_url, "postgres://database-url");
  }
}
