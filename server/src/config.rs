use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    /// SQLite database at `--database`.
    Sqlite,
    /// Process-local map, emptied on restart.
    Memory,
}

/// Command-line and environment configuration for the server.
#[derive(Clone, Debug, Parser)]
#[command(name = "todo-api", version, about = "CRUD HTTP API for todos")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "TODO_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "TODO_API_STORAGE", value_enum, default_value_t = StorageKind::Sqlite)]
    pub storage: StorageKind,

    /// SQLite database file; `:memory:` keeps it in memory.
    #[arg(long, env = "DATABASE_URL", default_value = "todos.db")]
    pub database: PathBuf,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "todo-api",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--storage",
            "memory",
            "--database",
            "/tmp/t.db",
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.database, PathBuf::from("/tmp/t.db"));
    }

    #[test]
    fn rejects_unknown_storage() {
        assert!(Config::try_parse_from(["todo-api", "--storage", "postgres"]).is_err());
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Config::try_parse_from(["todo-api", "--port", "70000"]).is_err());
    }
}
