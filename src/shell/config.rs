use std::env;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::lookup_host;

const HOST_VAR: &str = "BOOKSHELF_HOST";
const PORT_VAR: &str = "BOOKSHELF_PORT";
const LOG_VAR: &str = "BOOKSHELF_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOOKSHELF_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("cannot load .env: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("cannot resolve {host}:{port}: {source}")]
    Unresolvable {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
}

/// A missing `.env` is fine; an unreadable or malformed one is not.
fn accept_dotenv(loaded: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match loaded {
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => Ok(other?),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9000,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        accept_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port,
            log_filter: lookup(LOG_VAR).unwrap_or(defaults.log_filter),
        })
    }

    pub async fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let unresolvable = |source| ConfigError::Unresolvable {
            host: self.host.clone(),
            port: self.port,
            source,
        };
        lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(unresolvable)?
            .next()
            .ok_or_else(|| {
                unresolvable(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no address found",
                ))
            })
    }
}
