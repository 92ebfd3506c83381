use itertools::Itertools;
use tracing::debug;

use super::{Clipboard, ContractForm, DashboardError};
use crate::store::{ContractRecord, ContractStore, Network, Storage, StoreError};

const TITLE: &str = "SafeVault Dashboard";
const TABLE_TITLE: &str = "Saved Contracts";
const EMPTY_PLACEHOLDER: &str = "No contracts saved yet.";
const HEADERS: [&str; 4] = ["Name", "Address", "Network", "Actions"];

/// Creation form plus the table of saved contracts.
///
/// Rows are numbered from 1, in the order they are rendered.
pub struct DashboardView<S, C> {
    store: ContractStore<S>,
    form: ContractForm,
    clipboard: C,
}

impl<S: Storage, C: Clipboard> DashboardView<S, C> {
    pub fn new(store: ContractStore<S>, clipboard: C) -> Self {
        DashboardView {
            store,
            form: ContractForm::default(),
            clipboard,
        }
    }

    pub fn form(&self) -> &ContractForm {
        &self.form
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_owned();
    }

    pub fn set_address(&mut self, address: &str) {
        self.form.address = address.to_owned();
    }

    pub fn set_network(&mut self, network: Network) {
        self.form.network = network;
    }

    /// Saves the form as a new contract. Returns `false`, leaving the form
    /// untouched, when the name or the address is empty.
    pub fn submit(&mut self) -> Result<bool, StoreError> {
        if !self.form.is_complete() {
            debug!("ignoring incomplete form");
            return Ok(false);
        }
        self.store.add(self.form.to_record())?;
        self.form.reset();
        Ok(true)
    }

    pub fn rows(&self) -> &[ContractRecord] {
        self.store.contracts()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn row(&self, row: usize) -> Result<&ContractRecord, DashboardError> {
        row.checked_sub(1)
            .and_then(|i| self.rows().get(i))
            .ok_or(DashboardError::NoSuchRow(row))
    }

    /// Copies the row's address. Clipboard failures are not reported.
    pub fn copy(&mut self, row: usize) -> Result<(), DashboardError> {
        let address = self.row(row)?.address.clone();
        if let Err(e) = self.clipboard.write_text(&address) {
            debug!(error = %e, "clipboard write failed");
        }
        Ok(())
    }

    /// Removes every contract sharing the row's address.
    pub fn remove(&mut self, row: usize) -> Result<(), DashboardError> {
        let address = self.row(row)?.address.clone();
        self.store.remove(&address)?;
        Ok(())
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            TITLE,
            self.render_form(),
            self.render_table()
        )
    }

    pub fn render_form(&self) -> String {
        let name = field_or_placeholder(&self.form.name, "Name");
        let address = field_or_placeholder(&self.form.address, "0x...");
        format!(
            "Name:    {}\nAddress: {}\nNetwork: {}\n[+ Save]",
            name, address, self.form.network
        )
    }

    pub fn render_table(&self) -> String {
        if self.is_empty() {
            return format!("{}\n{}", TABLE_TITLE, EMPTY_PLACEHOLDER);
        }

        let rows: Vec<[String; 4]> = self
            .rows()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                [
                    c.name.clone(),
                    c.address.clone(),
                    c.network.to_string(),
                    format!("copy {}, remove {}", i + 1, i + 1),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in rows.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_row = |cells: &[&str]| {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .join(" | ")
                .trim_end()
                .to_owned()
        };

        let mut lines = vec![TABLE_TITLE.to_owned(), format_row(&HEADERS)];
        lines.push(widths.iter().map(|w| "-".repeat(*w)).join("-+-"));
        for row in rows.iter() {
            let cells = row.iter().map(String::as_str).collect::<Vec<_>>();
            lines.push(format_row(&cells));
        }
        lines.join("\n")
    }
}

fn field_or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("<{}>", placeholder)
    } else {
        value.to_owned()
    }
}
