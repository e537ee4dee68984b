use crate::error::{AppError, Result};
use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub cors: CorsConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres(DatabaseConfig),
    Memory { seed_file: Option<PathBuf> },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Knobs for the pages and the query update.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub sample_size: i64,
    pub marketplace_domain: String,
    pub finn_ad_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sample_size: 20,
            marketplace_domain: "finn.no".to_string(),
            finn_ad_url: "https://www.finn.no/bap/forsale/ad.html?finnkode=".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let defaults = CatalogConfig::default();

        let store = match var_or("STORE_BACKEND", "postgres").to_lowercase().as_str() {
            "postgres" => StoreConfig::Postgres(DatabaseConfig {
                url: lookup("DB_URL")
                    .ok_or_else(|| AppError::ConfigError("DB_URL not set".to_string()))?,
                max_connections: var_or("DB_MAX_CONNECTIONS", "10").parse().map_err(|_| {
                    AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                })?,
                acquire_timeout: Duration::from_secs(
                    var_or("DB_ACQUIRE_TIMEOUT_SECS", "5").parse().map_err(|_| {
                        AppError::ConfigError("Invalid DB_ACQUIRE_TIMEOUT_SECS value".to_string())
                    })?,
                ),
            }),
            "memory" => StoreConfig::Memory {
                seed_file: lookup("SEED_FILE").map(PathBuf::from),
            },
            other => {
                return Err(AppError::ConfigError(format!(
                    "Unknown STORE_BACKEND: {}",
                    other
                )));
            }
        };

        let sample_size: i64 = var_or("SAMPLE_SIZE", "20")
            .parse()
            .map_err(|_| AppError::ConfigError("Invalid SAMPLE_SIZE value".to_string()))?;

        if sample_size <= 0 {
            return Err(AppError::ConfigError(
                "SAMPLE_SIZE must be positive".to_string(),
            ));
        }

        let allowed_origins: Vec<String> = var_or("FRONTEND_URL", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // A wildcard cannot be part of an origin list.
        if allowed_origins.iter().any(|origin| origin == "*") {
            return Err(AppError::ConfigError(
                "FRONTEND_URL must list explicit origins, not \"*\"".to_string(),
            ));
        }

        Ok(Self {
            server: ServerConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: var_or("PORT", "3000")
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: var_or("MAX_BODY_SIZE", "1048576")
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            store,
            cors: CorsConfig { allowed_origins },
            catalog: CatalogConfig {
                sample_size,
                marketplace_domain: lookup("MARKETPLACE_DOMAIN")
                    .unwrap_or(defaults.marketplace_domain),
                finn_ad_url: lookup("FINN_AD_URL").unwrap_or(defaults.finn_ad_url),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
