//! Application configuration. API credentials, listener port.

use serde::Deserialize;

/// Default HTTP listener port.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Trello API key. Read from TRELLO_API_KEY.
    #[serde(default)]
    pub trello_api_key: Option<String>,

    /// Trello API token. Read from TRELLO_TOKEN.
    #[serde(default)]
    pub trello_token: Option<String>,

    /// Asana personal access token. Read from ASANA_ACCESS_TOKEN.
    #[serde(default)]
    pub asana_access_token: Option<String>,

    /// HTTP listener port. Read from PORT; kept as text so a bad value
    /// falls back to the default instead of failing the whole load.
    #[serde(default)]
    pub port: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::default());
        if let Ok(path) = std::env::var("BOARD_SYNC_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the Trello API key from config or TRELLO_API_KEY env.
    pub fn trello_api_key(&self) -> Option<String> {
        self.trello_api_key
            .clone()
            .or_else(|| std::env::var("TRELLO_API_KEY").ok())
    }

    /// Returns the Trello API token from config or TRELLO_TOKEN env.
    pub fn trello_token(&self) -> Option<String> {
        self.trello_token
            .clone()
            .or_else(|| std::env::var("TRELLO_TOKEN").ok())
    }

    /// Returns the Asana access token from config or ASANA_ACCESS_TOKEN env.
    pub fn asana_access_token(&self) -> Option<String> {
        self.asana_access_token
            .clone()
            .or_else(|| std::env::var("ASANA_ACCESS_TOKEN").ok())
    }

    /// Returns the listener port. Defaults to 3000 if unset or invalid.
    pub fn port_or_default(&self) -> u16 {
        self.port
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// Returns true if both Trello credentials are present.
    pub fn is_trello_configured(&self) -> bool {
        self.trello_api_key().is_some() && self.trello_token().is_some()
    }

    /// Returns true if the Asana token is present.
    pub fn is_asana_configured(&self) -> bool {
        self.asana_access_token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset_or_invalid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.port_or_default(), DEFAULT_PORT);

        let cfg = AppConfig {
            port: Some("8080".into()),
            ..Default::default()
        };
        assert_eq!(cfg.port_or_default(), 8080);

        let cfg = AppConfig {
            port: Some("not-a-port".into()),
            ..Default::default()
        };
        assert_eq!(cfg.port_or_default(), DEFAULT_PORT);
    }
}
