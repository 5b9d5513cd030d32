use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use tracing::Level;

/// ✅ Global Config stored in `OnceLock`
static CONFIG: OnceLock<Arc<Config>> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_data: bool,
    pub playground_enabled: bool,
    pub log_level: Level,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            seed_data: true,
            playground_enabled: true,
            log_level: Level::INFO,
            log_dir: None,
        }
    }
}

impl Config {
    /// ✅ Load environment variables and set defaults
    pub fn from_env() -> Self {
        dotenv().ok(); // Load .env only once

        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            seed_data: parse_var("SEED_DATA").unwrap_or(defaults.seed_data),
            playground_enabled: parse_var("GRAPHQL_PLAYGROUND")
                .unwrap_or(defaults.playground_enabled),
            log_level: parse_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: env::var("LOG_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// ✅ Initialize the global config (first caller wins)
    pub fn init() -> Arc<Config> {
        CONFIG.get_or_init(|| Arc::new(Self::from_env())).clone()
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {addr}: {e}"))
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| parse_value(&raw))
}

fn parse_value<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().to_ascii_lowercase().parse().ok()
}
