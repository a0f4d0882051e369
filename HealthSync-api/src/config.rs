//! Server configuration read from the environment (and `.env`, via dotenv)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::Duration;
use thiserror::Error;

use health_sync_domain::auth::AccountSettings;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A variable was set to something unusable
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value found
        value: String,
    },
}

/// Runtime configuration for the API server
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to bind (`HOST`)
    pub host: IpAddr,
    /// Port to bind (`PORT`)
    pub port: u16,
    /// Deployment environment reported by /health (`APP_ENV`)
    pub environment: String,
    /// Session lifetime in minutes (`SESSION_TTL_MINUTES`)
    pub session_ttl_minutes: i64,
    /// One-time code lifetime in minutes (`OTP_TTL_MINUTES`)
    pub otp_ttl_minutes: i64,
    /// Voice output mode, `off` or `log` (`VOICE_OUTPUT`)
    pub voice_output: String,
    /// Speaking rate in words per minute (`VOICE_RATE`)
    pub voice_rate: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            environment: "development".to_string(),
            session_ttl_minutes: 60,
            otp_ttl_minutes: 10,
            voice_output: "off".to_string(),
            voice_rate: 150,
        }
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

fn positive_minutes(name: &'static str, raw: Option<String>, default: i64) -> Result<i64, ConfigError> {
    let minutes = parse(name, raw, default)?;
    if minutes <= 0 {
        return Err(ConfigError::InvalidValue {
            name,
            value: minutes.to_string(),
        });
    }
    Ok(minutes)
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session_ttl_minutes = positive_minutes("SESSION_TTL_MINUTES", lookup("SESSION_TTL_MINUTES"), defaults.session_ttl_minutes)?;
        let otp_ttl_minutes = positive_minutes("OTP_TTL_MINUTES", lookup("OTP_TTL_MINUTES"), defaults.otp_ttl_minutes)?;

        let voice_output = lookup("VOICE_OUTPUT")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or(defaults.voice_output);
        if !matches!(voice_output.as_str(), "off" | "log") {
            return Err(ConfigError::InvalidValue {
                name: "VOICE_OUTPUT",
                value: voice_output,
            });
        }

        Ok(Self {
            host: parse("HOST", lookup("HOST"), defaults.host)?,
            port: parse("PORT", lookup("PORT"), defaults.port)?,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            session_ttl_minutes,
            otp_ttl_minutes,
            voice_output,
            voice_rate: parse("VOICE_RATE", lookup("VOICE_RATE"), defaults.voice_rate)?,
        })
    }

    /// Socket address to listen on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Account service settings derived from this configuration
    pub fn account_settings(&self) -> AccountSettings {
        AccountSettings {
            session_ttl: Duration::minutes(self.session_ttl_minutes),
            otp_ttl: Duration::minutes(self.otp_ttl_minutes),
        }
    }
}
