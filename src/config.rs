use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Site branding handed to the API layer at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub header: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio Admin".to_string(),
            header: "Portfolio Administration".to_string(),
        }
    }
}

/// How create/update/delete requests are authorised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteAuthConfig {
    /// Every write is accepted.
    Off,
    /// HS256 bearer tokens signed with a shared secret.
    Secret { secret: String },
    /// ES256/ES384 bearer tokens verified against a remote key set.
    Jwks { url: String, api_key: Option<String> },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub media_dir: Option<PathBuf>,
    pub site: SiteConfig,
    pub write_auth: WriteAuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let run_migrations = match get("RUN_MIGRATIONS") {
            Some(raw) => parse_bool("RUN_MIGRATIONS", raw)?,
            None => false,
        };

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            title: get("SITE_TITLE").unwrap_or(defaults.title),
            header: get("SITE_HEADER").unwrap_or(defaults.header),
        };

        let write_auth = match get("WRITE_AUTH").as_deref().map(str::to_ascii_lowercase) {
            None => WriteAuthConfig::Off,
            Some(mode) => match mode.as_str() {
                "off" | "none" | "false" => WriteAuthConfig::Off,
                "secret" => WriteAuthConfig::Secret {
                    secret: get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
                },
                "jwks" => WriteAuthConfig::Jwks {
                    url: get("JWKS_URL").ok_or(ConfigError::Missing("JWKS_URL"))?,
                    api_key: get("JWKS_API_KEY"),
                },
                other => {
                    return Err(ConfigError::Invalid {
                        key: "WRITE_AUTH",
                        value: other.to_string(),
                    });
                }
            },
        };

        Ok(Self {
            database_url,
            port,
            run_migrations,
            media_dir: get("MEDIA_DIR").map(PathBuf::from),
            site,
            write_auth,
        })
    }
}

fn parse_bool(key: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}
