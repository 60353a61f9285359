use thiserror::Error;

/// A record was submitted with one or more required fields left empty.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} is missing required field(s): {}", .missing.join(", "))]
pub struct ValidationError {
    pub kind: &'static str,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to persist collection: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to serialize collection")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Validation failures are the user's to fix; everything else is the store's.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}
