use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while persisting the settings file.
///
/// Reading never produces one of these: an unreadable file is logged and
/// treated as empty.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot determine the home directory for the settings file")]
    NoHomeDir,

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write settings to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that stop a print batch before (or while) it runs.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("copy count must be a whole number from 1 to {max}, got {0:?}", max = crate::consts::MAX_COPIES)]
    InvalidCopies(String),

    #[error("printer port must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("unknown control {given:?}, expected one of: {choices}")]
    UnknownControl { given: String, choices: String },

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

pub type LabelResult<T> = Result<T, LabelError>;
