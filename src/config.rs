//! Runtime configuration read from the environment (and `.env`).

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TABLE: &str = "indictments";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
    #[error("{0} is set but {1} is missing")]
    Incomplete(&'static str, &'static str),
}

/// Connection settings for the Supabase row store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// PostgREST endpoint of the project, e.g. `https://xyz.supabase.co/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `SUPABASE_TABLE`.
    ///
    /// Returns `Ok(None)` when neither URL nor key is set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let url = non_empty_var("SUPABASE_URL");
        let anon_key = non_empty_var("SUPABASE_ANON_KEY");

        match (url, anon_key) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::Incomplete("SUPABASE_URL", "SUPABASE_ANON_KEY")),
            (None, Some(_)) => Err(ConfigError::Incomplete("SUPABASE_ANON_KEY", "SUPABASE_URL")),
            (Some(url), Some(anon_key)) => {
                let mut config = Self::new(url, anon_key);
                if let Some(table) = non_empty_var("SUPABASE_TABLE") {
                    config.table = table;
                }
                Ok(Some(config))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub supabase: Option<SupabaseConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = non_empty_var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty_var("SERVER_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: "SERVER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let allowed_origins = non_empty_var("ALLOWED_ORIGINS")
            .map(|value| parse_origins(&value))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            allowed_origins,
            supabase: SupabaseConfig::from_env()?,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
