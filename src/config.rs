use axum::http::HeaderValue;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite:./investors.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_SEED_CSV: &str = "data/data.csv";

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
    InvalidFrontendOrigin(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(addr) => write!(f, "BIND_ADDR is not a socket address: {}", addr),
            ConfigError::InvalidFrontendOrigin(origin) => write!(f, "FRONTEND_ORIGIN is not a valid origin: {}", origin),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origin allowed to call the API with credentials
    pub frontend_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env (if present) so DATABASE_URL from file is visible
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = database_url(&lookup);

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let frontend_origin = lookup("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string());
        let frontend_origin = HeaderValue::from_str(frontend_origin.trim_end_matches('/'))
            .map_err(|_| ConfigError::InvalidFrontendOrigin(frontend_origin.clone()))?;

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origin,
        })
    }
}

/// Settings of the seeder. Server-only keys are not read, so a bad
/// `BIND_ADDR` or `FRONTEND_ORIGIN` does not stop seeding.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database_url: String,
    /// CSV file to load
    pub seed_csv: PathBuf,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: database_url(&lookup),
            seed_csv: lookup("SEED_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_CSV)),
        }
    }
}

fn database_url<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}
