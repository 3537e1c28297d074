use std::env;
use anyhow::{Context, Result};

/// Process-level settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub owner: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .context("API_BASE_URL not set")?;

        let owner = lookup("OWNER")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "Anonymous".to_string());

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {}", raw))?,
            None => 8080,
        };

        Ok(Self { api_base_url, owner, host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
