use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Todo service configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "gRPC server for todo.v1.TodoService")]
pub struct Config {
    /// gRPC listen address
    #[arg(long, env = "TODO_GRPC_ADDR", default_value = "[::1]:13000")]
    pub addr: SocketAddr,

    /// SQLite database file, created when missing
    #[arg(long, env = "TODO_DB_FILE", default_value = "todo.db")]
    pub db_file: PathBuf,

    /// Upper bound on range queries per export window. Unbounded when unset.
    #[arg(long, env = "TODO_MAX_STREAM_CONCURRENCY")]
    pub max_stream_concurrency: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["todo-server"]).unwrap();

        assert_eq!(config.addr, "[::1]:13000".parse().unwrap());
        assert_eq!(config.db_file, PathBuf::from("todo.db"));
        assert_eq!(config.max_stream_concurrency, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "todo-server",
            "--addr",
            "127.0.0.1:9000",
            "--db-file",
            "/tmp/tasks.db",
            "--max-stream-concurrency",
            "8",
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.max_stream_concurrency, Some(8));
    }
}
