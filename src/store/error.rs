#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("malformed saved contracts: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to serialize saved contracts: {0}")]
    Serialization(#[source] serde_json::Error),
}
