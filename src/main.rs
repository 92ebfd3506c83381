use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use safevault::{
    dashboard::{DashboardView, TerminalClipboard},
    repl::{self, Cli, Repl},
    store::{ContractStore, FileStorage},
};

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let storage_file = repl::storage_file(&cli.storage_file)?;
    info!(path = %storage_file.display(), "opening storage");
    let store = ContractStore::load(FileStorage::new(storage_file))?;
    let view = DashboardView::new(store, TerminalClipboard);

    let mut repl = Repl::create(view, &cli)?;
    repl.run();

    Ok(())
}
