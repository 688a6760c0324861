use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;
use todo_config::constants::{
    DEFAULT_HOST, DEFAULT_PORT, PORT, TODO_CORS_ORIGIN, TODO_HOST, TODO_PORT,
};
use todo_config::{env_with_fallback, non_empty_env};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// When set, browsers from this origin may call the API.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host_str = non_empty_env(TODO_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.clone()))?;

        let port = match env_with_fallback(TODO_PORT, PORT) {
            Some(port_str) => port_str.parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        let cors_origin = non_empty_env(TODO_CORS_ORIGIN);

        Config {
            host,
            port,
            cors_origin,
        }
        .validated()
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        host: Option<IpAddr>,
        port: Option<u16>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        // Validate port is in valid range
        if self.port == 0 {
            return Err(ConfigError::PortOutOfRange(self.port));
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
