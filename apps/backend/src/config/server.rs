use std::env;

use crate::error::AppError;
use crate::errors::ErrorCode;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 2022;
/// Range bcrypt accepts for its work factor.
const BCRYPT_COSTS: std::ops::RangeInclusive<u32> = 4..=31;

/// Listener and password-hashing settings read by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Read `BACKEND_HOST`, `BACKEND_PORT` and `BCRYPT_COST`, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let host = env::var("BACKEND_HOST").unwrap_or(defaults.host);
        let port = parse_var("BACKEND_PORT")?.unwrap_or(defaults.port);
        let bcrypt_cost = parse_var("BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost);

        if !BCRYPT_COSTS.contains(&bcrypt_cost) {
            return Err(AppError::config(
                ErrorCode::ConfigError,
                format!(
                    "BCRYPT_COST must be between {} and {}, got {bcrypt_cost}",
                    BCRYPT_COSTS.start(),
                    BCRYPT_COSTS.end()
                ),
            ));
        }

        Ok(Self {
            host,
            port,
            bcrypt_cost,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AppError::config(
                ErrorCode::ConfigError,
                format!("Environment variable '{name}' has an invalid value: '{raw}'"),
            )
        }),
        Err(_) => Ok(None),
    }
}
