use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Malformed version: {0:?}")]
    Malformed(String),
}
