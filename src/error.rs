//! Error types.
//!
//! Every failure is terminal for the current invocation. Messages are short
//! and never carry decryptor diagnostics or secret material.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("interactive selection requires a terminal")]
    NotInteractive,

    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while turning a secret file into entries.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The file is missing, could not be decrypted, or holds no entries.
    ///
    /// These cases are deliberately indistinguishable.
    #[error("nothing to read: file is empty or could not be decrypted")]
    EmptyOrMissing,
}

/// Failures while resolving a key or alias.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("no secret named {0}")]
    NotFound(String),
}

/// Failures while performing the requested action.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActionError {
    #[error("no clipboard utility found (install pbcopy, wl-copy, xclip or xsel)")]
    NoClipboardUtility,

    #[error("clipboard utility failed: {0}")]
    ClipboardFailed(String),

    #[error("invalid action: {0} (expected copy or export)")]
    InvalidAction(String),

    #[error("invalid variable name: {0}")]
    InvalidVariableName(String),

    #[error("value of {0} contains a NUL byte and cannot be exported")]
    NulInValue(String),
}

/// Failures locating secret files.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("secret file not found: {0}")]
    FileNotFound(String),

    #[error("secrets directory not found: {0}")]
    DirNotFound(String),

    #[error("no secret files in {0}")]
    NoFiles(String),
}

/// Failures loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
