use std::env;

use log::*;
use storefront_common::parse_boolean_flag;

const DEFAULT_SFS_HOST: &str = "127.0.0.1";
const DEFAULT_SFS_PORT: u16 = 8380;
const DEFAULT_SFS_DATABASE_URL: &str = "sqlite://data/storefront.db";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// When true, database migrations run automatically at startup, so a fresh checkout comes up with a browsable
    /// demo catalog.
    pub auto_migrate: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SFS_HOST.to_string(),
            port: DEFAULT_SFS_PORT,
            database_url: DEFAULT_SFS_DATABASE_URL.to_string(),
            auto_migrate: true,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SFS_HOST").ok().unwrap_or_else(|| DEFAULT_SFS_HOST.into());
        let port = env::var("SFS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SFS_PORT. {e} Using the default, {DEFAULT_SFS_PORT}, instead."
                    );
                    DEFAULT_SFS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SFS_PORT);
        let database_url = env::var("SFS_DATABASE_URL").unwrap_or_else(|_| {
            info!("SFS_DATABASE_URL is not set. Using the default, {DEFAULT_SFS_DATABASE_URL}.");
            DEFAULT_SFS_DATABASE_URL.to_string()
        });
        let auto_migrate = parse_boolean_flag(env::var("SFS_AUTO_MIGRATE").ok(), true);
        Self { host, port, database_url, auto_migrate }
    }
}
