//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;

/// Default Firebase Auth REST endpoint.
pub const DEFAULT_FIREBASE_AUTH_URL: &str = "https://identitytoolkit.googleapis.com/v1";
/// Default news API base URL.
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Firebase web API key (identifies the project to Firebase Auth)
    pub firebase_api_key: String,
    /// Firebase Auth REST base URL (override to point at the auth emulator)
    pub firebase_auth_url: String,
    /// GCP project ID hosting Firestore
    pub gcp_project_id: String,
    /// News API base URL
    pub news_api_url: String,
    /// News API key
    pub news_api_key: String,
    /// Search term for the Home feed
    pub news_query: String,
    /// Credentials to sign in with at start, if any
    pub sign_in: Option<(String, String)>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            firebase_api_key: "test_api_key".to_string(),
            firebase_auth_url: DEFAULT_FIREBASE_AUTH_URL.to_string(),
            gcp_project_id: "test-project".to_string(),
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
            news_api_key: "test_news_key".to_string(),
            news_query: "fitness".to_string(),
            sign_in: None,
        }
    }
}

impl Config {
    /// Config for tests, pointing nowhere real.
    pub fn test_default() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let sign_in = match (env::var("WHEYT_EMAIL"), env::var("WHEYT_PASSWORD")) {
            (Ok(email), Ok(password)) => Some((email.trim().to_string(), password)),
            _ => None,
        };

        Ok(Self {
            firebase_api_key: env::var("FIREBASE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FIREBASE_API_KEY"))?,
            firebase_auth_url: env::var("FIREBASE_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_FIREBASE_AUTH_URL.to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            news_api_url: env::var("NEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string()),
            news_api_key: env::var("NEWS_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("NEWS_API_KEY"))?,
            news_query: env::var("NEWS_QUERY").unwrap_or_else(|_| "fitness".to_string()),
            sign_in,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("FIREBASE_API_KEY", " test_key ");
        env::set_var("NEWS_API_KEY", "news_key");
        env::remove_var("NEWS_QUERY");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.firebase_api_key, "test_key");
        assert_eq!(config.news_api_key, "news_key");
        assert_eq!(config.news_query, "fitness");
    }
}
