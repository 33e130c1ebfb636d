//! Lookup engine.
//!
//! Resolves a key or alias to a secret. The first match in file order wins;
//! duplicates are not an error.

use tracing::debug;

use crate::core::domain::{Entry, Format, ResolvedSecret};
use crate::error::LookupError;

/// Resolve `query` within parsed entries.
///
/// Matching is exact and case-sensitive. Entries of the other format are
/// ignored.
///
/// In key-value files a key whose first occurrence has an empty value counts
/// as absent. Alias records are returned even when `pass` is empty.
///
/// # Errors
///
/// Returns `LookupError::NotFound` if nothing matches.
pub fn resolve(
    entries: &[Entry],
    format: Format,
    query: &str,
) -> Result<ResolvedSecret, LookupError> {
    let found = entries.iter().find(|entry| match (format, entry) {
        (Format::KeyValue, Entry::KeyValue { key, .. }) => key == query,
        (Format::AliasRecord, Entry::AliasRecord { alias, .. }) => alias == query,
        _ => false,
    });

    let entry = match found {
        Some(entry) => entry,
        None => {
            debug!(query, %format, "no entry matched");
            return Err(LookupError::NotFound(query.to_string()));
        }
    };

    if format == Format::KeyValue && entry.secret().is_empty() {
        debug!(query, "key has an empty value");
        return Err(LookupError::NotFound(query.to_string()));
    }

    Ok(ResolvedSecret::new(entry.name(), entry.secret()))
}

/// Keys or aliases in file order, without duplicates.
pub fn names(entries: &[Entry]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.name().is_empty() && !names.contains(&entry.name()) {
            names.push(entry.name());
        }
    }
    names
}
