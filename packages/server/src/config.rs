//! Server configuration from command-line flags and environment variables.

use clap::{Parser, ValueEnum};

/// Where rooms are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Process memory; nothing survives a restart
    Memory,
    /// SQLite database at `--database-url`
    Sqlite,
}

/// Room finder REST server
#[derive(Debug, Clone, Parser)]
#[command(name = "roomfinder-server", version, about)]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, env = "ROOMFINDER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ROOMFINDER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Storage backend
    #[arg(long, env = "ROOMFINDER_STORAGE", value_enum, default_value_t = StorageBackend::Sqlite)]
    pub storage: StorageBackend,

    /// SQLite connection URL (used with `--storage sqlite`)
    #[arg(long, env = "ROOMFINDER_DATABASE_URL", default_value = "sqlite://roomfinder.db")]
    pub database_url: String,

    /// Default log level; `RUST_LOG` overrides it
    #[arg(long, env = "ROOMFINDER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
