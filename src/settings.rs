//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CINETHEQUE_`-prefixed environment
//! variables, or a configuration file, in that precedence order.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CINETHEQUE")]
pub struct Settings {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Absent means in-memory repositories.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl Settings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the configured value is not a valid
    /// socket address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|err| std::io::Error::other(format!("invalid bind address {raw}: {err}")))
    }

    /// Return the configured pool size, falling back to the pool default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn settings(bind_addr: Option<&str>) -> Settings {
        Settings {
            bind_addr: bind_addr.map(str::to_owned),
            database_url: None,
            db_max_connections: None,
        }
    }

    #[rstest]
    fn bind_addr_defaults_when_unset() {
        let addr = settings(None).bind_addr().expect("default address");
        assert_eq!(addr.port(), 8080);
    }

    #[rstest]
    fn bind_addr_parses_configured_values() {
        let addr = settings(Some("127.0.0.1:9000")).bind_addr().expect("address");
        assert_eq!(addr.port(), 9000);
        assert!(addr.ip().is_loopback());
    }

    #[rstest]
    fn invalid_bind_addr_is_rejected() {
        assert!(settings(Some("not-an-address")).bind_addr().is_err());
    }

    #[rstest]
    fn pool_size_defaults_to_ten() {
        assert_eq!(settings(None).db_max_connections(), 10);
    }
}
