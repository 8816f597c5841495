use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;
use crate::auth::password::hash_password;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the catalog documents (default: `./data`).
    pub data_dir: PathBuf,
    /// Admin credentials checked by the login endpoint.
    pub admin: AdminConfig,
    /// JWT token configuration.
    pub jwt: JwtConfig,
}

/// The single back-office admin account.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    /// Argon2id PHC hash of the admin password.
    pub password_hash: String,
}

impl AdminConfig {
    /// Load the admin credential from environment variables.
    ///
    /// `ADMIN_PASSWORD_HASH` takes precedence; otherwise `ADMIN_PASSWORD`
    /// (default `admin123`) is hashed at startup so the stored config never
    /// holds plaintext.
    ///
    /// # Panics
    ///
    /// Panics if hashing the configured password fails.
    pub fn from_env() -> Self {
        let email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@greatacademy.com".into());

        let password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) if !hash.is_empty() => hash,
            _ => {
                let password =
                    std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());
                hash_password(&password).expect("Failed to hash ADMIN_PASSWORD")
            }
        };

        Self {
            email,
            password_hash,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3001`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_DIR`             | `./data`                   |
    /// | `ADMIN_EMAIL`          | `admin@greatacademy.com`   |
    /// | `ADMIN_PASSWORD`       | `admin123`                 |
    /// | `ADMIN_PASSWORD_HASH`  | (hash of `ADMIN_PASSWORD`) |
    /// | `JWT_SECRET`           | **required**               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            admin: AdminConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
