//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME,
    DEFAULT_CERTIFICATES_PATH, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_EXAM_DURATION_MINUTES,
    DEFAULT_MAX_TAB_SWITCHES, DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub smtp: SmtpConfig,
    pub exam: ExamConfig,
    pub certificate: CertificateConfig,
    pub bootstrap: BootstrapConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_minutes: i64,
    pub refresh_token_expiry_days: i64,
}

/// SMTP delivery configuration
///
/// Empty credentials mean email delivery is disabled; certificate sends are
/// skipped with a warning instead of failing the request.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

/// Exam flow configuration
#[derive(Debug, Clone)]
pub struct ExamConfig {
    /// Exam duration announced to the client and enforced on submit
    pub duration_minutes: u32,
    /// Tab-switch count at which a submission is flagged as malpractice
    pub max_tab_switches: u32,
}

/// Certificate output configuration
#[derive(Debug, Clone)]
pub struct CertificateConfig {
    pub output_dir: PathBuf,
}

/// Startup bootstrap configuration (default admin account)
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub admin_name: String,
    pub admin_email: String,
    /// Empty means "do not create an admin account"
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            smtp: SmtpConfig::from_env()?,
            exam: ExamConfig::from_env()?,
            certificate: CertificateConfig::from_env()?,
            bootstrap: BootstrapConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            access_token_expiry_minutes: env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
                .unwrap_or_else(|_| DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ACCESS_TOKEN_EXPIRY_MINUTES".to_string()))?,
            refresh_token_expiry_days: env::var("REFRESH_TOKEN_EXPIRY_DAYS")
                .unwrap_or_else(|_| DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REFRESH_TOKEN_EXPIRY_DAYS".to_string()))?,
        })
    }
}

impl SmtpConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string()),
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| DEFAULT_SMTP_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SMTP_PORT".to_string()))?,
            username: env::var("SMTP_USER").unwrap_or_default(),
            password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address: env::var("EMAIL_FROM").unwrap_or_default(),
        })
    }

    /// Whether SMTP delivery is configured
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl ExamConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            duration_minutes: env::var("EXAM_DURATION_MINUTES")
                .unwrap_or_else(|_| DEFAULT_EXAM_DURATION_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EXAM_DURATION_MINUTES".to_string()))?,
            max_tab_switches: env::var("MAX_TAB_SWITCHES")
                .unwrap_or_else(|_| DEFAULT_MAX_TAB_SWITCHES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MAX_TAB_SWITCHES".to_string()))?,
        })
    }
}

impl CertificateConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            output_dir: PathBuf::from(
                env::var("CERTIFICATES_PATH").unwrap_or_else(|_| DEFAULT_CERTIFICATES_PATH.to_string()),
            ),
        })
    }
}

impl BootstrapConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| DEFAULT_ADMIN_NAME.to_string()),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_smtp_configured() {
        let mut smtp = SmtpConfig {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            username: String::new(),
            password: String::new(),
            from_address: String::new(),
        };
        assert!(!smtp.is_configured());

        smtp.username = "certs@example.com".to_string();
        smtp.password = "app-password".to_string();
        assert!(smtp.is_configured());
    }
}
