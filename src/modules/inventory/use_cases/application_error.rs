use crate::modules::inventory::adapters::outbound::inventory_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("store task did not complete: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}
