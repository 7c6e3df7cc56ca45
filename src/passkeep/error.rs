use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassKeepError {
    #[error("Password length must be at least 1")]
    InvalidLength,

    #[error("No character class selected: the character pool is empty")]
    NoCharacterClassSelected,

    #[error("Website, email and password are all required")]
    IncompleteCredential,

    #[error("No credentials stored for: {0}")]
    NotFound(String),

    #[error("Corrupt store file {}: {reason}", path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PassKeepError>;
