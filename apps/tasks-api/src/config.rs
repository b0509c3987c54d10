//! Configuration for the Tasks API

use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the workspace libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - fails if DATABASE_URL is unset
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=8080
        let api_prefix = env_or_default("API_PREFIX", "/api/v1");

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            api_prefix,
        })
    }
}
