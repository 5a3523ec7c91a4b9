use std::env;

use sea_orm::DatabaseConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub run_migrations: bool,
    pub run_seeders: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = parse_var("PORT", 3000)?;
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let run_migrations = parse_var("RUN_MIGRATIONS", true)?;
        let run_seeders = parse_var("RUN_SEEDERS", true)?;

        Ok(Config {
            server_host,
            server_port,
            database_url,
            run_migrations,
            run_seeders,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
