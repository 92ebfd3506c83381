use tracing::{debug, info};

use super::{ContractRecord, Storage, StoreError};

pub const STORAGE_KEY: &str = "saved_contracts";

/// Ordered list of saved contracts, mirrored to `STORAGE_KEY` after every mutation.
pub struct ContractStore<S> {
    storage: S,
    contracts: Vec<ContractRecord>,
}

impl<S: Storage> ContractStore<S> {
    pub fn load(storage: S) -> Result<Self, StoreError> {
        let contracts = match storage.get_item(STORAGE_KEY)? {
            Some(stored) if !stored.is_empty() => {
                serde_json::from_str(&stored).map_err(StoreError::Malformed)?
            }
            _ => vec![],
        };
        debug!(count = contracts.len(), "loaded saved contracts");
        Ok(ContractStore { storage, contracts })
    }

    pub fn contracts(&self) -> &[ContractRecord] {
        &self.contracts
    }

    pub fn add(&mut self, record: ContractRecord) -> Result<&[ContractRecord], StoreError> {
        info!(
            name = %record.name,
            address = %record.address,
            network = record.network.tag(),
            "adding contract"
        );
        let mut contracts = self.contracts.clone();
        contracts.push(record);
        self.save(contracts)?;
        Ok(&self.contracts)
    }

    /// Removes every record whose address matches exactly.
    pub fn remove(&mut self, address: &str) -> Result<&[ContractRecord], StoreError> {
        let contracts: Vec<_> = self
            .contracts
            .iter()
            .filter(|c| c.address != address)
            .cloned()
            .collect();
        info!(
            address,
            removed = self.contracts.len() - contracts.len(),
            "removing contract"
        );
        self.save(contracts)?;
        Ok(&self.contracts)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // the list is only swapped in once the write succeeded
    fn save(&mut self, contracts: Vec<ContractRecord>) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&contracts).map_err(StoreError::Serialization)?;
        self.storage.set_item(STORAGE_KEY, &serialized)?;
        debug!(count = contracts.len(), "persisted saved contracts");
        self.contracts = contracts;
        Ok(())
    }
}
