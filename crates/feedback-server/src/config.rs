use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use feedback_api::notify::DEFAULT_API_BASE;

/// Process configuration, read from the environment once at startup.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("FEEDBACK_PORT").unwrap_or_else(|| "3000".into());

        Ok(Self {
            host: lookup("FEEDBACK_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: port
                .parse()
                .with_context(|| format!("Invalid FEEDBACK_PORT: {}", port))?,
            db_path: lookup("FEEDBACK_DB_PATH")
                .unwrap_or_else(|| "feedback.db".into())
                .into(),
            telegram_bot_token: lookup("TELEGRAM_BOT_TOKEN").filter(|v| !v.is_empty()),
            telegram_chat_id: lookup("TELEGRAM_CHAT_ID").filter(|v| !v.is_empty()),
            telegram_api_base: lookup("TELEGRAM_API_BASE")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.into()),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_path, PathBuf::from("feedback.db"));
        assert_eq!(config.telegram_api_base, DEFAULT_API_BASE);
        assert!(config.telegram_bot_token.is_none());
        assert!(config.telegram_chat_id.is_none());
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn empty_credentials_count_as_absent() {
        let config = config(&[("TELEGRAM_BOT_TOKEN", ""), ("TELEGRAM_CHAT_ID", "42")]).unwrap();
        assert!(config.telegram_bot_token.is_none());
        assert_eq!(config.telegram_chat_id.as_deref(), Some("42"));
    }

    #[test]
    fn invalid_port_is_fatal() {
        assert!(config(&[("FEEDBACK_PORT", "eighty")]).is_err());
    }
}
