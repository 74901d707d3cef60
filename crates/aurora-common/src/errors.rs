use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage directory unavailable: {0}")]
    DirUnavailable(PathBuf),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encode error: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid accent color: {0}")]
    InvalidColor(String),

    #[error("settings validation error: {0}")]
    Validation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AuroraError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("shell error: {0}")]
    Shell(String),

    #[error("{0}")]
    Other(String),
}
