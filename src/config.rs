//! Configuration loading from environment variables.

use std::env;
use thiserror::Error;

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Default frontend origin when `FRONTEND_URL` is unset.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

const DEFAULT_JWT_SECRET: &str = "hr-dev-secret";

/// Errors raised while loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is missing. Set it in .env or the deployment environment.")]
    MissingVar(&'static str),
}

/// Runtime configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub frontend_url: String,
    pub port: u16,
    pub environment: String,
    pub jwt_secret: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when `MONGO_URI` is unset. Every
    /// other variable has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongo_uri = env::var("MONGO_URI")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("MONGO_URI"))?;

        Ok(Self {
            mongo_uri,
            frontend_url: env::var("FRONTEND_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
        })
    }

    /// The exact set of origins permitted to make credentialed cross-origin
    /// requests. Membership test only; order is irrelevant.
    pub fn allowed_origins(&self) -> Vec<String> {
        vec![
            self.frontend_url.clone(),
            "http://localhost:3000".to_string(),
            "http://localhost:3001".to_string(),
            "https://hrapp.onrender.com".to_string(),
            "https://app-hr-nine.vercel.app".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(frontend_url: &str) -> Config {
        Config {
            mongo_uri: "mongodb://localhost:27017/hr".to_string(),
            frontend_url: frontend_url.to_string(),
            port: DEFAULT_PORT,
            environment: "test".to_string(),
            jwt_secret: "secret".to_string(),
        }
    }

    #[test]
    fn allowed_origins_start_with_configured_frontend() {
        let config = test_config("https://hr.example.com");
        let origins = config.allowed_origins();
        assert_eq!(origins[0], "https://hr.example.com");
        assert!(origins.contains(&"http://localhost:3000".to_string()));
        assert!(origins.contains(&"https://app-hr-nine.vercel.app".to_string()));
    }

    #[test]
    fn allowed_origins_include_default_frontend_when_unconfigured() {
        let config = test_config(DEFAULT_FRONTEND_URL);
        assert!(config
            .allowed_origins()
            .contains(&DEFAULT_FRONTEND_URL.to_string()));
    }

    #[test]
    fn missing_mongo_uri_is_a_typed_error() {
        let err = ConfigError::MissingVar("MONGO_URI");
        assert!(err.to_string().contains("MONGO_URI is missing"));
    }
}
