//! Engine configuration from the process environment.
//!
//! Read once at startup and passed down explicitly; nothing here is global.

use std::net::SocketAddr;
use std::time::Duration;

use followgraph_domain::TieBreak;

const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
const DEFAULT_NEO4J_USER: &str = "neo4j";
const DEFAULT_NEO4J_PASSWORD: &str = "password";
const DEFAULT_ADDRESS: &str = "0.0.0.0:50051";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{variable} is not a valid listen address: {value}")]
    InvalidAddress { variable: &'static str, value: String },

    #[error("{variable} must be a positive number of seconds: {value}")]
    InvalidTimeout { variable: &'static str, value: String },

    #[error("{variable}: {message}")]
    InvalidTieBreak {
        variable: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub connect_timeout: Duration,
    pub listen_addr: SocketAddr,
    pub tie_break: TieBreak,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let first = |keys: &[&str], default: &str| {
            keys.iter()
                .find_map(|key| get(*key))
                .unwrap_or_else(|| default.to_string())
        };

        let address = first(&["FOLLOWER_SERVICE_ADDRESS"], DEFAULT_ADDRESS);
        let listen_addr = parse_listen_addr(&address).ok_or(ConfigError::InvalidAddress {
            variable: "FOLLOWER_SERVICE_ADDRESS",
            value: address.clone(),
        })?;

        let connect_timeout = match get("NEO4J_CONNECT_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        variable: "NEO4J_CONNECT_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        let tie_break = match get("RECOMMENDATION_TIE_BREAK") {
            None => TieBreak::default(),
            Some(raw) => raw.parse().map_err(|e: followgraph_domain::DomainError| {
                ConfigError::InvalidTieBreak {
                    variable: "RECOMMENDATION_TIE_BREAK",
                    message: e.to_string(),
                }
            })?,
        };

        Ok(Self {
            neo4j_uri: first(&["NEO4J_URI", "NEO4J_DB"], DEFAULT_NEO4J_URI),
            neo4j_user: first(&["NEO4J_USER", "NEO4J_USERNAME"], DEFAULT_NEO4J_USER),
            neo4j_password: first(&["NEO4J_PASSWORD", "NEO4J_PASS"], DEFAULT_NEO4J_PASSWORD),
            connect_timeout,
            listen_addr,
            tie_break,
        })
    }
}

/// Accepts `host:port` or a bare `:port`, which binds every interface.
fn parse_listen_addr(value: &str) -> Option<SocketAddr> {
    if let Some(port) = value.strip_prefix(':') {
        return format!("0.0.0.0:{port}").parse().ok();
    }
    value.parse().ok()
}
