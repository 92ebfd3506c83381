use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::warn;

use super::command::Command;
use super::config::history_file;
use super::helper::{create_editor, DashboardHelper};
use super::parsing::parse_command;
use super::Cli;
use crate::dashboard::{Clipboard, DashboardView};
use crate::store::Storage;

pub struct Repl<S, C> {
    rl: Editor<DashboardHelper, FileHistory>,
    view: DashboardView<S, C>,
    history_file: Option<PathBuf>,
}

impl<S: Storage, C: Clipboard> Repl<S, C> {
    pub fn create(view: DashboardView<S, C>, cli: &Cli) -> Result<Self> {
        let rl = create_editor()?;
        let history_file = history_file(&cli.history_file);
        Ok(Repl {
            rl,
            view,
            history_file,
        })
    }

    pub fn run(&mut self) {
        if let Some(history_file) = &self.history_file {
            let _ = self.rl.load_history(history_file);
        }

        println!("{}", self.view.render());
        self.run_repl();

        if let Some(history_file) = &self.history_file {
            if let Some(parent) = history_file.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = self.rl.save_history(history_file) {
                warn!(error = %e, "failed to save history");
            }
        }
    }

    fn run_repl(&mut self) {
        loop {
            let readline = self.rl.readline(">> ");
            match readline {
                Ok(line) => {
                    if !self.process_line(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    /// Returns `false` once the user asked to leave.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }
        let command = match parse_command(line) {
            Ok(Command::Exit) => return false,
            Ok(command) => command,
            Err(e) => {
                println!("Error: {}", e);
                return true;
            }
        };
        match command.execute(&mut self.view) {
            Ok(None) => (),
            Ok(Some(output)) => println!("{}", output),
            Err(e) => println!("Error: {}", e),
        }
        true
    }
}
