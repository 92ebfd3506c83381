use pretty_assertions::assert_eq;
use safevault::store::{
    ContractRecord, ContractStore, MemoryStorage, Network, Storage, StoreError, STORAGE_KEY,
};

#[test]
fn test_append_order() {
    let mut store = _create_store();
    let records = _records();
    for record in records.iter() {
        store.add(record.clone()).unwrap();
    }
    assert_eq!(store.contracts(), records.as_slice());
}

#[test]
fn test_round_trip() {
    let mut store = _create_store();
    let records = _records();
    for record in records.iter() {
        store.add(record.clone()).unwrap();
    }

    let reopened = ContractStore::load(store.into_storage()).unwrap();
    assert_eq!(reopened.contracts(), records.as_slice());
}

#[test]
fn test_remove_by_address() {
    let mut store = _create_store();
    for record in _records() {
        store.add(record).unwrap();
    }
    store
        .add(ContractRecord::new("Vault v2", "0xABC", Network::Arbitrum))
        .unwrap();

    let remaining = store.remove("0xABC").unwrap().to_vec();
    assert_eq!(
        remaining,
        vec![
            ContractRecord::new("Router", "0xDEF", Network::Polygon),
            ContractRecord::new("Bridge", "0x123", Network::Arbitrum),
        ]
    );
}

#[test]
fn test_remove_is_case_sensitive() {
    let mut store = _create_store();
    store
        .add(ContractRecord::new("Vault", "0xABC", Network::Ethereum))
        .unwrap();
    assert_eq!(store.remove("0xabc").unwrap().len(), 1);
}

#[test]
fn test_remove_absent_address() {
    let mut store = _create_store();
    for record in _records() {
        store.add(record).unwrap();
    }
    let before = store.contracts().to_vec();
    assert_eq!(store.remove("0x999").unwrap(), before.as_slice());
    assert_eq!(store.remove("0x999").unwrap(), before.as_slice());
}

#[test]
fn test_scenario() {
    let mut store = _create_store();
    store
        .add(ContractRecord::new("Vault", "0xABC", Network::Ethereum))
        .unwrap();
    store
        .add(ContractRecord::new("Router", "0xDEF", Network::Polygon))
        .unwrap();
    store.remove("0xABC").unwrap();

    assert_eq!(
        store.contracts(),
        &[ContractRecord::new("Router", "0xDEF", Network::Polygon)]
    );
    assert_eq!(
        _stored_json(&store),
        r#"[{"name":"Router","address":"0xDEF","network":"polygon"}]"#
    );
}

#[test]
fn test_load_existing_list() {
    let storage = MemoryStorage::with_item(
        STORAGE_KEY,
        r#"[{"name":"Vault","address":"0xABC","network":"ethereum"}]"#,
    );
    let store = ContractStore::load(storage).unwrap();
    assert_eq!(
        store.contracts(),
        &[ContractRecord::new("Vault", "0xABC", Network::Ethereum)]
    );
}

#[test]
fn test_load_malformed_list() {
    let storage = MemoryStorage::with_item(STORAGE_KEY, r#"{"name":"Vault"}"#);
    assert!(matches!(
        ContractStore::load(storage),
        Err(StoreError::Malformed(_))
    ));
}

fn _stored_json(store: &ContractStore<MemoryStorage>) -> String {
    store.storage().get_item(STORAGE_KEY).unwrap().unwrap()
}

fn _records() -> Vec<ContractRecord> {
    vec![
        ContractRecord::new("Vault", "0xABC", Network::Ethereum),
        ContractRecord::new("Router", "0xDEF", Network::Polygon),
        ContractRecord::new("Bridge", "0x123", Network::Arbitrum),
    ]
}

fn _create_store() -> ContractStore<MemoryStorage> {
    ContractStore::load(MemoryStorage::new()).unwrap()
}
