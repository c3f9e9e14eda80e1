use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Run the employee-department create inside a single transaction.
    pub composite_atomic: bool,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Single-connection in-memory SQLite. Every pooled connection to
    /// `sqlite::memory:` would otherwise open its own empty database.
    pub fn in_memory() -> Self {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

impl EnvConfig {
    fn get_env(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn parse_env<T: FromStr>(key: &str, default: T) -> T {
        match env::var(key) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring unparseable {}={:?}, using default", key, raw);
                default
            }),
            Err(_) => default,
        }
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let url = Self::get_env("DATABASE_URL", "sqlite://employees.db?mode=rwc");
        let max_connections = Self::parse_env("DATABASE_MAX_CONNECTIONS", 10u32).max(1);
        let mut database = DatabaseConfig { url, max_connections, min_connections: 0 };
        // In-memory databases only survive on a single pinned connection.
        if database.is_in_memory() {
            database.max_connections = 1;
            database.min_connections = 1;
        }

        EnvConfig {
            host: Self::get_env("HOST", "0.0.0.0"),
            port: Self::parse_env("PORT", 5000u16),
            database,
            composite_atomic: Self::parse_env("COMPOSITE_ATOMIC", false),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
