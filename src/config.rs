use std::net::{SocketAddr, ToSocketAddrs};

use thiserror::Error;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_marker_scale() -> f64 {
    25.0
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid listen address '{0}'")]
    Address(String),
    #[error("marker scale must be a positive finite number, got {0}")]
    MarkerScale(f64),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Accepts IP literals (v4 or bare v6) and resolvable host names.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::Address(self.host.clone()))
    }
}

/// Display knobs for the globe view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeSettings {
    /// Multiplier applied to `ln(1 + wind_speed)` to get the marker size.
    pub marker_scale: f64,
    pub rotation_lon: f64,
    pub rotation_lat: f64,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            marker_scale: default_marker_scale(),
            rotation_lon: -100.0,
            rotation_lat: 20.0,
        }
    }
}

impl GlobeSettings {
    pub fn with_marker_scale(mut self, scale: f64) -> Self {
        self.marker_scale = scale;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.marker_scale.is_finite() || self.marker_scale <= 0.0 {
            return Err(ConfigError::MarkerScale(self.marker_scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_view() {
        let settings = GlobeSettings::default();
        assert_eq!(settings.marker_scale, 25.0);
        assert_eq!(settings.rotation_lon, -100.0);
        assert_eq!(settings.rotation_lat, 20.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_scale() {
        for scale in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(GlobeSettings::default()
                .with_marker_scale(scale)
                .validate()
                .is_err());
        }
    }

    #[test]
    fn builds_socket_address() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 8501);

        let bad = ServerConfig {
            host: "not a host".into(),
            port: 1,
        };
        assert!(matches!(bad.socket_addr(), Err(ConfigError::Address(_))));
    }

    #[test]
    fn accepts_ipv6_and_host_names() {
        let v6 = ServerConfig {
            host: "::1".into(),
            port: 8501,
        };
        let addr = v6.socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 8501);

        let named = ServerConfig {
            host: "localhost".into(),
            port: 9000,
        };
        let addr = named.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9000);
    }
}
