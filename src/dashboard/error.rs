use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("no contract at row {0}")]
    NoSuchRow(usize),

    #[error(transparent)]
    Store(#[from] StoreError),
}
