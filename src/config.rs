//! Server configuration from environment variables

use crate::types::DEFAULT_POINTS_AWARD;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Port the original board server listened on
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FAMILY100_HOST must be an IP address or 'localhost', got {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory with the admin and presenter pages
    pub static_dir: PathBuf,
    /// Points awarded per `POST /api/game/points/{team}` without an amount
    pub default_points: i64,
    /// Interval between WebSocket heartbeats (None = disabled)
    pub heartbeat: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            default_points: DEFAULT_POINTS_AWARD,
            heartbeat: Some(Duration::from_secs(15)),
        }
    }
}

impl ServerConfig {
    /// Load config from FAMILY100_* environment variables, falling back to defaults.
    ///
    /// An unparseable host is an error rather than a fallback, so a typo never
    /// widens the bind to every interface.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match std::env::var("FAMILY100_HOST") {
            Ok(raw) if !raw.trim().is_empty() => parse_host(raw.trim())?,
            _ => defaults.host,
        };
        let port = parse_var("FAMILY100_PORT").unwrap_or(defaults.port);
        let static_dir = std::env::var("FAMILY100_STATIC_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let default_points =
            parse_var("FAMILY100_DEFAULT_POINTS").unwrap_or(defaults.default_points);
        let heartbeat = match parse_var::<u64>("FAMILY100_HEARTBEAT_SECS") {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.heartbeat,
        };

        Ok(Self {
            host,
            port,
            static_dir,
            default_points,
            heartbeat,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: &str) -> Result<IpAddr, ConfigError> {
    if raw.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    raw.parse()
        .map_err(|_| ConfigError::InvalidHost(raw.to_string()))
}

/// Read and parse a variable. Unset or blank yields None; garbage is logged and ignored.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", name, raw);
            None
        }
    }
}
