//! Secret file format.

use std::path::Path;

use crate::core::constants;

/// Layout of a decrypted secret file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// `KEY=VALUE` lines.
    KeyValue,
    /// `{alias:"...",username:"...",pass:"..."}` lines.
    AliasRecord,
}

impl Format {
    /// Infer the format from a file path.
    ///
    /// Only a basename equal to the reserved alias file name selects
    /// [`Format::AliasRecord`]; every other file is [`Format::KeyValue`].
    pub fn infer(path: impl AsRef<Path>) -> Self {
        match path.as_ref().file_name().and_then(|n| n.to_str()) {
            Some(name) if name == constants::ALIAS_FILE => Self::AliasRecord,
            _ => Self::KeyValue,
        }
    }

    /// Label used in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeyValue => "key-value",
            Self::AliasRecord => "alias-record",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
