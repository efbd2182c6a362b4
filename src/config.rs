use serde::Deserialize;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_environment")]
    pub environment: String,

    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// CORS settings
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or "*" for any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a hardcoded default, so a bare environment
    /// still boots. Numeric values that fail to parse fall back to
    /// their defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| default_environment()),
            server: ServerConfig {
                host: env::var("APP_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("APP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or_else(default_max_connections),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| default_allowed_origins()),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

// Default value functions

fn default_environment() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "postgresql://localhost/posting".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_allowed_origins() -> String {
    "*".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_environment(), "development");
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 8080);
        assert_eq!(default_database_url(), "postgresql://localhost/posting");
        assert_eq!(default_max_connections(), 20);
        assert_eq!(default_allowed_origins(), "*");
    }

    #[test]
    fn test_environment_helpers() {
        let config = Config {
            environment: default_environment(),
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            database: DatabaseConfig {
                url: default_database_url(),
                max_connections: default_max_connections(),
            },
            cors: CorsConfig {
                allowed_origins: default_allowed_origins(),
            },
        };

        assert!(config.is_development());
        assert!(!config.is_production());
    }
}
