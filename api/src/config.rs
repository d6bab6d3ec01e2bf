use std::env;
use std::time::Duration;

use axum::http::HeaderValue;
use regex::Regex;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
const DEFAULT_PROCEDURE: &str = "fn_ejecutar_procedimiento";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Origin allowed by CORS (the dashboard front end)
    pub client_url: String,
    /// Function invoked by `POST /api/execute-procedure`, optionally schema-qualified
    pub procedure_name: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let config = Self {
            database_url,
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
            client_url: lookup("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            procedure_name: lookup("PROCEDURE_NAME")
                .unwrap_or_else(|| DEFAULT_PROCEDURE.to_string()),
            max_connections: parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 10)?,
            connect_timeout: Duration::from_secs(parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                lookup("DB_CONNECT_TIMEOUT_SECS"),
                8,
            )?),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_sql_identifier(&self.procedure_name) {
            return Err(ConfigError::Invalid {
                name: "PROCEDURE_NAME",
                reason: format!("'{}' is not a SQL identifier", self.procedure_name),
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }
        self.cors_origin()?;
        Ok(())
    }

    /// CORS origin header value for the client URL
    pub fn cors_origin(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(self.client_url.trim_end_matches('/')).map_err(|e| {
            ConfigError::Invalid {
                name: "CLIENT_URL",
                reason: e.to_string(),
            }
        })
    }

    /// Database URL with the password masked, for logs
    pub fn redacted_database_url(&self) -> String {
        redact_password(&self.database_url)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().parse().map_err(|e: T::Err| {
            ConfigError::Invalid {
                name,
                reason: e.to_string(),
            }
        }),
        _ => Ok(default),
    }
}

/// Plain or schema-qualified identifier: `name` or `schema.name`
pub fn is_sql_identifier(name: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$")
        .expect("identifier pattern is valid");
    re.is_match(name)
}

fn redact_password(url: &str) -> String {
    let re = Regex::new(r"^(?P<scheme>[a-z][a-z0-9+.-]*://[^:/@]+:)[^@]*@")
        .expect("url pattern is valid");
    re.replace(url, "${scheme}***@").into_owned()
}
