use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(name = "imoveis_site")]
#[command(version, about = "Real-estate listing site with local search", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Serve the public site (default)
    Serve,
    /// Search the catalogue from the terminal
    Browse,
}

/// Settings shared by every subcommand. Flags win over environment variables.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// SQLite database file
    #[arg(long, global = true, env = "IMOVEIS_DB", default_value = "imoveis.sqlite3")]
    pub db: String,

    /// Schema applied at startup
    #[arg(long, global = true, env = "IMOVEIS_SCHEMA", default_value = "sql/schema.sql")]
    pub schema: String,

    /// Address the HTTP server binds to
    #[arg(long, global = true, env = "IMOVEIS_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// HTTP worker threads
    #[arg(long, global = true, env = "IMOVEIS_WORKERS", default_value_t = 8)]
    pub workers: usize,
}
