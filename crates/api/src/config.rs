use crate::auth::password::hash_password;
use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database URL (default: `sqlite:grocery.db`).
    pub database_url: String,
    /// Admin session token configuration (secret, expiry).
    pub session: SessionConfig,
    /// Admin credentials (username plus hashed password).
    pub admin: AdminConfig,
}

/// The single admin principal, injected from the environment rather
/// than stored in the database or the source.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    /// Argon2id PHC hash of the admin password. The plaintext from the
    /// environment is hashed once at startup and not kept around.
    pub password_hash: String,
}

impl AdminConfig {
    /// Load admin credentials from environment variables.
    ///
    /// | Env Var          | Required | Default |
    /// |------------------|----------|---------|
    /// | `ADMIN_USERNAME` | no       | `admin` |
    /// | `ADMIN_PASSWORD` | **yes**  | --      |
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD` is not set, is empty, or cannot be hashed.
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());

        let password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let password_hash = hash_password(&password).expect("Failed to hash ADMIN_PASSWORD");

        Self {
            username,
            password_hash,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0`           |
    /// | `PORT`                 | `5000`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                |
    /// | `DATABASE_URL`         | `sqlite:grocery.db` |
    ///
    /// Session and admin settings are documented on [`SessionConfig`]
    /// and [`AdminConfig`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:grocery.db".into());

        let session = SessionConfig::from_env();
        let admin = AdminConfig::from_env();

        Self {
            host,
            port,
            request_timeout_secs,
            database_url,
            session,
            admin,
        }
    }
}
