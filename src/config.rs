use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub db_max_connections: u32,

    // Logging
    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", "5")?,
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: parse_var("LOG_LEVEL", "debug")?,
        })
    }
}

fn parse_var<T>(name: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .with_context(|| format!("{name} has an invalid value: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_to_default() {
        let value: u32 = parse_var("PEOPLE_REGISTRY_UNSET_VAR", "7").unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn parse_var_reports_bad_default_with_name() {
        let err = parse_var::<u32>("PEOPLE_REGISTRY_UNSET_VAR", "seven").unwrap_err();
        assert!(err.to_string().contains("PEOPLE_REGISTRY_UNSET_VAR"));
    }

    #[test]
    fn log_level_parses_from_text() {
        let level: tracing::Level = parse_var("PEOPLE_REGISTRY_UNSET_LEVEL", "info").unwrap();
        assert_eq!(level, tracing::Level::INFO);
    }
}
