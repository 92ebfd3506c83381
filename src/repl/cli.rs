use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File holding the saved contracts
    #[arg(long, value_name = "FILE", env = "SAFEVAULT_STORAGE_FILE")]
    pub storage_file: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(long, env = "DEBUG")]
    pub debug: bool,

    /// File where to store history
    #[arg(long, value_name = "FILE", env = "SAFEVAULT_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,
}
