//! Startup configuration for the web form.
//!
//! Read once from the environment; nothing here is consulted after the
//! server is up.

use std::net::{AddrParseError, Ipv4Addr, SocketAddr, SocketAddrV4};
use std::num::ParseIntError;
use thiserror::Error;

pub const ADDR_ENV: &str = "PWD_METER_ADDR";
pub const PORT_ENV: &str = "PWD_METER_PORT";
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 8501));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("Invalid port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
        }
    }
}

impl ServerConfig {
    /// Resolves the bind address from the environment alone.
    ///
    /// Priority:
    /// 1. `PWD_METER_PORT` replaces the port of whatever address was chosen
    /// 2. `PWD_METER_ADDR`
    /// 3. Default `127.0.0.1:8501`
    ///
    /// # Errors
    ///
    /// Returns error if either variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }

    /// Like [`ServerConfig::from_env`], but an explicit address or port
    /// replaces the matching variable, which is then not read at all.
    pub fn resolve(addr: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let addr = addr.map(str::to_string).or_else(|| std::env::var(ADDR_ENV).ok());
        if let Some(value) = addr {
            config.addr = parse_addr(&value)?;
        }

        let port = port.map(str::to_string).or_else(|| std::env::var(PORT_ENV).ok());
        if let Some(value) = port {
            config.addr.set_port(parse_port(&value)?);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Server config resolved: {}", config.addr);

        Ok(config)
    }
}

pub fn parse_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidAddr {
            value: value.to_string(),
            source,
        })
}

pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidPort {
            value: value.to_string(),
            source,
        })
}
