//! Parsed entries.

use zeroize::Zeroizing;

/// A single entry of a decrypted secret file.
///
/// `Debug` never prints secret values.
#[derive(Clone, PartialEq, Eq)]
pub enum Entry {
    /// A `KEY=VALUE` line.
    KeyValue {
        key: String,
        value: Zeroizing<String>,
    },
    /// An `{alias:"...",username:"...",pass:"..."}` line.
    AliasRecord {
        alias: String,
        username: String,
        pass: Zeroizing<String>,
    },
}

impl Entry {
    /// Build a key-value entry.
    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValue {
            key: key.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    /// Build an alias record.
    pub fn alias_record(
        alias: impl Into<String>,
        username: impl Into<String>,
        pass: impl Into<String>,
    ) -> Self {
        Self::AliasRecord {
            alias: alias.into(),
            username: username.into(),
            pass: Zeroizing::new(pass.into()),
        }
    }

    /// Lookup name: the key or the alias.
    pub fn name(&self) -> &str {
        match self {
            Self::KeyValue { key, .. } => key,
            Self::AliasRecord { alias, .. } => alias,
        }
    }

    /// Secret payload: the value or the pass field.
    pub fn secret(&self) -> &str {
        match self {
            Self::KeyValue { value, .. } => value,
            Self::AliasRecord { pass, .. } => pass,
        }
    }

    /// Username of an alias record.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::KeyValue { .. } => None,
            Self::AliasRecord { username, .. } => Some(username),
        }
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyValue { key, .. } => f
                .debug_struct("KeyValue")
                .field("key", key)
                .field("value", &"<redacted>")
                .finish(),
            Self::AliasRecord {
                alias, username, ..
            } => f
                .debug_struct("AliasRecord")
                .field("alias", alias)
                .field("username", username)
                .field("pass", &"<redacted>")
                .finish(),
        }
    }
}
