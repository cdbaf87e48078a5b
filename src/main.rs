use crate::app::AppState;
use crate::config::{Cli, Command, Config};
use crate::db::{init_db, Database};
use crate::router::respond;
use crate::search::SearchConfig;
use astra::{Request, Server};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod browse;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("imoveis_site=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let db = Database::new(&cli.config.db);
    if let Err(e) = init_db(&db, &cli.config.schema) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let state = AppState::load(&db);

    let result = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state, &cli.config),
        Command::Browse => browse::run(state.listings, &SearchConfig::default())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e)),
    };

    if let Err(e) = result {
        error!(error = %e, "exited with error");
        std::process::exit(1);
    }
}

fn serve(state: AppState, config: &Config) -> std::io::Result<()> {
    info!(addr = %config.addr, workers = config.workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.workers);

    server.serve(move |req: Request, _info| respond(req, &state))?;

    info!("server shut down cleanly");
    Ok(())
}
