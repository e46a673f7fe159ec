use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::CareError;

/// Application-level constants
pub const APP_NAME: &str = "MedSpa Care";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HOST_ENV: &str = "MEDSPA_CARE_HOST";
pub const PORT_ENV: &str = "MEDSPA_CARE_PORT";
pub const DEFAULT_PORT: u16 = 8787;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "medspa_care_lib=debug,medspa_care=debug,tower_http=info"
    } else {
        "medspa_care_lib=info,medspa_care=info,tower_http=warn"
    }
}

/// Where the JSON API listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `MEDSPA_CARE_HOST` / `MEDSPA_CARE_PORT`, falling back to defaults.
    pub fn from_env() -> Result<Self, CareError> {
        Self::from_values(
            std::env::var(HOST_ENV).ok().as_deref(),
            std::env::var(PORT_ENV).ok().as_deref(),
        )
    }

    /// Parse raw values; `None` or blank means "use the default".
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, CareError> {
        let defaults = Self::default();

        let host = match host.map(str::trim).filter(|h| !h.is_empty()) {
            Some(h) => h.parse::<IpAddr>().map_err(|e| {
                CareError::Config(format!("{HOST_ENV}={h:?} is not an IP address: {e}"))
            })?,
            None => defaults.host,
        };

        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| CareError::Config(format!("{PORT_ENV}={p:?} is not a port: {e}")))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
