//! Server configuration from environment variables.

/// Default location of the SQLite file, next to the working directory.
const DEFAULT_DATABASE_PATH: &str = "db.sqlite";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Request bodies larger than this are rejected before deserialization.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file. Created if missing.
    pub database_path: String,
    pub bind_addr: String,
}

impl Config {
    /// Read `DATABASE_PATH` and `BIND_ADDR` from env, with defaults.
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
        }
    }
}
