/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised by the accessibility settings store.
///
/// Storage failures never roll back in-memory state: the store keeps the new settings and
/// the caller decides whether running without persistence is acceptable.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings storage: {0}")]
    StorageRead(std::io::Error),
    #[error("failed to write settings storage: {0}")]
    StorageWrite(std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize settings: {0}")]
    Deserialization(serde_json::Error),
    #[error("font size must be a finite number, got {0}")]
    InvalidFontSize(f32),
    #[error("unknown preference: {0}")]
    UnknownPreference(String),
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
