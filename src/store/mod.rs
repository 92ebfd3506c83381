mod contract_store;
mod error;
mod storage;
mod types;

pub use contract_store::{ContractStore, STORAGE_KEY};
pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use types::{ContractRecord, Network};
