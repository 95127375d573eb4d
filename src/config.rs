use std::env;
use std::fmt;
use std::path::PathBuf;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_VERSION: &str = "v37.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Provider identity and server settings, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub redirect_url: String,
    pub login_base_url: String,
    pub refresh_token: String,
    pub api_version: String,
    pub sync_refreshed_token: bool,
    pub verify_signature: bool,
    pub templates_dir: PathBuf,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("login_base_url", &self.login_base_url)
            .field(
                "refresh_token",
                &if self.refresh_token.is_empty() {
                    "<unset>"
                } else {
                    "<redacted>"
                },
            )
            .field("api_version", &self.api_version)
            .field("sync_refreshed_token", &self.sync_refreshed_token)
            .field("verify_signature", &self.verify_signature)
            .field("templates_dir", &self.templates_dir)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok(); // Load .env file

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str| -> Option<String> {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let consumer_key = required("CRM_CONSUMER_KEY")?;
        let consumer_secret = required("CRM_CONSUMER_SECRET")?;
        let redirect_url = required("CRM_REDIRECT_URL")?;
        let login_base_url = required("CRM_LOGIN_BASE_URL")?
            .trim_end_matches('/')
            .to_string();

        Url::parse(&login_base_url).map_err(|err| ConfigError::Invalid {
            key: "CRM_LOGIN_BASE_URL",
            reason: err.to_string(),
        })?;

        let refresh_token = optional("CRM_REFRESH_TOKEN").unwrap_or_default();
        let api_version =
            optional("CRM_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        let sync_refreshed_token = parse_flag(
            "CRM_SYNC_REFRESHED_TOKEN",
            optional("CRM_SYNC_REFRESHED_TOKEN"),
            true,
        )?;
        let verify_signature = parse_flag(
            "CRM_VERIFY_SIGNATURE",
            optional("CRM_VERIFY_SIGNATURE"),
            false,
        )?;
        let templates_dir = optional("TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR));
        let port = match optional("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|err| ConfigError::Invalid {
                key: "PORT",
                reason: err.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            consumer_key,
            consumer_secret,
            redirect_url,
            login_base_url,
            refresh_token,
            api_version,
            sync_refreshed_token,
            verify_signature,
            templates_dir,
            port,
        })
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}
