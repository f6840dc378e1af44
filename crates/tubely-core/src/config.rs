//! Configuration module
//!
//! Settings are read from the environment (after loading `.env` when present)
//! and validated once at startup.

use std::env;

use crate::constants::MAX_THUMBNAIL_SIZE_BYTES;

// Common constants
const SERVER_PORT: u16 = 8091;
const MAX_CONNECTIONS: u32 = 5;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const DATABASE_URL: &str = "sqlite://tubely.db";
const PUBLIC_BASE_URL: &str = "http://localhost:8091";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub jwt_secret: String,
    /// Scheme, host and port embedded in generated thumbnail URLs.
    pub public_base_url: String,
    pub max_thumbnail_size_bytes: usize,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .unwrap_or(SERVER_PORT),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DATABASE_URL.to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable not set"))?,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PUBLIC_BASE_URL.to_string()),
            max_thumbnail_size_bytes: env::var("MAX_THUMBNAIL_SIZE_BYTES")
                .unwrap_or_else(|_| MAX_THUMBNAIL_SIZE_BYTES.to_string())
                .parse()
                .unwrap_or(MAX_THUMBNAIL_SIZE_BYTES),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment: env::var("ENVIRONMENT")
                .or_else(|_| env::var("APP_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 characters long"
            ));
        }

        if !self.database_url.starts_with("sqlite:") {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a SQLite connection string (sqlite://...)"
            ));
        }

        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(anyhow::anyhow!(
                "PUBLIC_BASE_URL must start with http:// or https://"
            ));
        }

        if self.max_thumbnail_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_THUMBNAIL_SIZE_BYTES cannot be 0"));
        }

        if self.db_max_connections == 0 {
            return Err(anyhow::anyhow!("Database max connections cannot be 0"));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS configured to allow all origins (*) in production. \
                Set specific allowed origins via CORS_ORIGINS."
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server_port: SERVER_PORT,
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            db_timeout_seconds: 5,
            jwt_secret: "a".repeat(32),
            public_base_url: PUBLIC_BASE_URL.to_string(),
            max_thumbnail_size_bytes: MAX_THUMBNAIL_SIZE_BYTES,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn rejects_short_jwt_secret() {
        let config = Config {
            jwt_secret: "short".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_sqlite_database() {
        let config = Config {
            database_url: "postgresql://localhost/tubely".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_wildcard_cors_in_production() {
        let config = Config {
            environment: "Production".to_string(),
            ..valid_config()
        };
        assert!(config.is_production());
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let config = Config {
            public_base_url: "localhost:8091".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_limit_is_ten_mebibytes() {
        assert_eq!(valid_config().max_thumbnail_size_bytes, 10 * 1024 * 1024);
    }
}
