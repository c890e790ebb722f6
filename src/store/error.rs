use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}
