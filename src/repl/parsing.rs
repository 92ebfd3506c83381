use anyhow::{anyhow, bail, Result};

use super::command::Command;

fn parse_row(command: &str, arg: &str) -> Result<usize> {
    arg.parse::<usize>()
        .map_err(|_| anyhow!("{}: invalid row {:?}", command, arg))
}

fn no_args(command: Command, arg: &str) -> Result<Command> {
    if !arg.is_empty() {
        bail!("{}: invalid arguments", command);
    }
    Ok(command)
}

/// Splits off the command word. The text after the single separating space is
/// kept verbatim for `name` and `address`; other arguments are trimmed.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim_start();
    let (word, raw_arg) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };
    let arg = raw_arg.trim();
    match word {
        "name" => Ok(Command::Name(raw_arg.to_owned())),
        "address" => Ok(Command::Address(raw_arg.to_owned())),
        "network" => Ok(Command::Network(arg.parse()?)),
        "copy" => Ok(Command::Copy(parse_row(word, arg)?)),
        "remove" => Ok(Command::Remove(parse_row(word, arg)?)),
        "save" => no_args(Command::Save, arg),
        "form" => no_args(Command::Form, arg),
        "list" => no_args(Command::List, arg),
        "help" => no_args(Command::Help, arg),
        "exit" | "quit" => no_args(Command::Exit, arg),
        _ => Err(anyhow!("unknown command {:?}, try help", word)),
    }
}
