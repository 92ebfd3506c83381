mod cli;
mod command;
mod completer;
mod config;
mod helper;
mod parsing;
#[allow(clippy::module_inception)]
mod repl;

pub use cli::Cli;
pub use command::Command;
pub use config::storage_file;
pub use parsing::parse_command;
pub use repl::Repl;
