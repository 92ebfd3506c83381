use crate::store::{ContractRecord, Network};

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ContractForm {
    pub name: String,
    pub address: String,
    pub network: Network,
}

impl ContractForm {
    /// Presence check on the raw field values, no trimming.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.address.is_empty()
    }

    pub fn to_record(&self) -> ContractRecord {
        ContractRecord::new(&self.name, &self.address, self.network)
    }

    pub fn reset(&mut self) {
        *self = ContractForm::default();
    }
}
