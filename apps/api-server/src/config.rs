//! Application configuration loaded from environment variables.

use std::env;

use anyhow::Context;

use ruya_infra::{DatabaseConfig, JwtConfig, OpenRouterConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
    pub jwt: JwtConfig,
    /// `None` when no provider key is set.
    pub openrouter: Option<OpenRouterConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let mut database = DatabaseConfig::new(url);
        if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
            database.max_connections = max;
        }
        if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
            database.min_connections = min;
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            auto_migrate: env::var("DB_AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            jwt: JwtConfig::from_env(),
            openrouter: OpenRouterConfig::from_env(),
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
