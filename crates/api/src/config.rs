use crate::auth::jwt::JwtConfig;
use crate::auth::password::PasswordConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL and JWT secret have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Service name reported by `/health` and in startup logs.
    pub app_name: String,
    pub database: DatabaseConfig,
    /// JWT signing configuration (secret, algorithm, expiry durations).
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    /// Credentials of the super-admin account ensured at startup.
    pub system_user: SystemUserConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SystemUserConfig {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Development-only fallback; production deployments set `SYSTEM_USER_PASSWORD`.
const DEV_SYSTEM_USER_PASSWORD: &str = "change-me-system-password";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `APP_NAME`                 | `jobboard`                 |
    ///
    /// Database, JWT, password and system-user settings are documented on
    /// their own loaders.
    ///
    /// # Panics
    ///
    /// Panics on any missing required variable or unparsable value.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| "jobboard".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            app_name,
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            password: PasswordConfig::from_env(),
            system_user: SystemUserConfig::from_env(),
        }
    }
}

impl DatabaseConfig {
    /// | Env Var                    | Default      |
    /// |----------------------------|--------------|
    /// | `DATABASE_URL`             | **required** |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`         |
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");
        assert!(max_connections > 0, "DATABASE_MAX_CONNECTIONS must be positive");

        Self {
            url,
            max_connections,
        }
    }
}

impl SystemUserConfig {
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `SYSTEM_USER_EMAIL`    | `system@jobboard.local`  |
    /// | `SYSTEM_USER_NAME`     | `System`                 |
    /// | `SYSTEM_USER_PASSWORD` | development default      |
    pub fn from_env() -> Self {
        let email = std::env::var("SYSTEM_USER_EMAIL")
            .unwrap_or_else(|_| "system@jobboard.local".into())
            .trim()
            .to_lowercase();
        let name = std::env::var("SYSTEM_USER_NAME").unwrap_or_else(|_| "System".into());
        let password = match std::env::var("SYSTEM_USER_PASSWORD") {
            Ok(password) if !password.is_empty() => password,
            _ => {
                tracing::warn!("SYSTEM_USER_PASSWORD not set, using the development default");
                DEV_SYSTEM_USER_PASSWORD.to_string()
            }
        };

        Self {
            email,
            name,
            password,
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT` (`pretty` or `json`, default `pretty`).
    ///
    /// Loaded separately from [`ServerConfig`] because the subscriber is
    /// installed before the rest of the configuration is read.
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            Ok(value) if value.is_empty() || value.eq_ignore_ascii_case("pretty") => {
                LogFormat::Pretty
            }
            Ok(value) => panic!("LOG_FORMAT must be 'pretty' or 'json', got '{value}'"),
            Err(_) => LogFormat::Pretty,
        }
    }
}
