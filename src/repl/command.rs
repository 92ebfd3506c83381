use anyhow::Result;

use crate::{
    dashboard::{Clipboard, DashboardView},
    store::{Network, Storage},
};

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Name(String),
    Address(String),
    Network(Network),
    Save,
    Form,
    List,
    Copy(usize),
    Remove(usize),
    Help,
    Exit,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Name(_) => write!(f, "name"),
            Command::Address(_) => write!(f, "address"),
            Command::Network(_) => write!(f, "network"),
            Command::Save => write!(f, "save"),
            Command::Form => write!(f, "form"),
            Command::List => write!(f, "list"),
            Command::Copy(_) => write!(f, "copy"),
            Command::Remove(_) => write!(f, "remove"),
            Command::Help => write!(f, "help"),
            Command::Exit => write!(f, "exit"),
        }
    }
}

const USAGE: [(&str, &str); 10] = [
    ("name <text>", "set the contract name"),
    ("address <text>", "set the contract address"),
    ("network <name>", "set the network (ethereum, polygon, arbitrum)"),
    ("save", "save the form as a new contract"),
    ("form", "show the form"),
    ("list", "show the dashboard"),
    ("copy <row>", "copy the address of a row"),
    ("remove <row>", "remove every contract with the address of a row"),
    ("help", "show this message"),
    ("exit", "quit"),
];

impl Command {
    pub fn names() -> Vec<&'static str> {
        vec![
            "name", "address", "network", "save", "form", "list", "copy", "remove", "help",
            "exit", "quit",
        ]
    }

    pub fn help() -> String {
        USAGE
            .iter()
            .map(|(usage, description)| format!("  {:<16} {}", usage, description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Runs the command and returns what should be printed, if anything.
    pub fn execute<S: Storage, C: Clipboard>(
        &self,
        view: &mut DashboardView<S, C>,
    ) -> Result<Option<String>> {
        match self {
            Command::Name(name) => view.set_name(name),
            Command::Address(address) => view.set_address(address),
            Command::Network(network) => view.set_network(*network),
            Command::Save => {
                if view.submit()? {
                    return Ok(Some(view.render_table()));
                }
            }
            Command::Form => return Ok(Some(view.render_form())),
            Command::List => return Ok(Some(view.render())),
            Command::Copy(row) => {
                view.copy(*row)?;
                return Ok(Some(format!("copied {}", view.row(*row)?.address)));
            }
            Command::Remove(row) => {
                view.remove(*row)?;
                return Ok(Some(view.render_table()));
            }
            Command::Help => return Ok(Some(Self::help())),
            Command::Exit => (),
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dashboard::MemoryClipboard,
        store::{ContractStore, MemoryStorage},
    };

    #[test]
    fn test_save_incomplete_form() {
        let store = ContractStore::load(MemoryStorage::new()).unwrap();
        let mut view = DashboardView::new(store, MemoryClipboard::default());
        Command::Name("Vault".to_owned()).execute(&mut view).unwrap();
        Command::Network(Network::Polygon).execute(&mut view).unwrap();
        let form = view.form().clone();

        let output = Command::Save.execute(&mut view).unwrap();
        assert_eq!(output, None);
        assert_eq!(view.form(), &form);
        assert!(view.is_empty());
    }

    #[test]
    fn test_copy_row() {
        let store = ContractStore::load(MemoryStorage::new()).unwrap();
        let mut view = DashboardView::new(store, MemoryClipboard::default());
        Command::Name("Vault".to_owned()).execute(&mut view).unwrap();
        Command::Address("0xABC".to_owned()).execute(&mut view).unwrap();
        Command::Save.execute(&mut view).unwrap();
        Command::Copy(1).execute(&mut view).unwrap();
        assert_eq!(view.clipboard().content(), Some("0xABC"));
        assert!(Command::Copy(2).execute(&mut view).is_err());
    }
}
