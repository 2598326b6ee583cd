//! Command-line and environment configuration for the server binary.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "items-server", about = "CRUD HTTP API for items", version)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "ITEMS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log filter directive such as `info` or `items_server=debug`.
    /// Falls back to `RUST_LOG`, then `info`, when absent.
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
