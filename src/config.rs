//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::ServiceError;

/// Prefix for every configuration variable, e.g. `HOSPITAL_PORT`.
pub const ENV_PREFIX: &str = "HOSPITAL_";

/// Which route layout the server exposes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Profile {
    /// `POST /v1/hospital`, `GET /v1/hospitals` (summaries without username).
    #[strum(serialize = "a")]
    #[serde(alias = "A")]
    #[default]
    A,
    /// `POST /v1/hospital`, `GET /v1/hospital`, `GET /v1/hospital/:username`.
    #[strum(serialize = "b")]
    #[serde(alias = "B")]
    B,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Route profile.
    #[serde(default)]
    pub profile: Profile,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            profile: Profile::default(),
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();
        Ok(envy::prefixed(ENV_PREFIX).from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.port == 0 {
            return Err(ServiceError::InvalidConfig(format!(
                "{ENV_PREFIX}PORT must be non-zero"
            )));
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
