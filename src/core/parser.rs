//! Entry parser.
//!
//! Turns decrypted plaintext into entries. Blank lines and `#` comments are
//! dropped before either format is parsed.
//!
//! Malformed lines never fail the parse: a key-value line without `=` becomes
//! a key with an empty value, and an alias record with a missing field gets
//! an empty string for it. The only failure is having nothing left at all.

use tracing::debug;

use crate::core::domain::{Entry, Format};
use crate::error::ParseError;

/// Parse decrypted plaintext in the given format.
///
/// # Errors
///
/// Returns `ParseError::EmptyOrMissing` if no entries remain after blank and
/// comment lines are dropped.
pub fn parse(plaintext: &str, format: Format) -> Result<Vec<Entry>, ParseError> {
    let entries: Vec<Entry> = content_lines(plaintext)
        .map(|line| match format {
            Format::KeyValue => parse_key_value(line),
            Format::AliasRecord => parse_alias_record(line),
        })
        .collect();

    debug!(entries = entries.len(), %format, "parsed secret file");

    if entries.is_empty() {
        return Err(ParseError::EmptyOrMissing);
    }

    Ok(entries)
}

/// Lines that carry an entry.
fn content_lines(plaintext: &str) -> impl Iterator<Item = &str> {
    plaintext.lines().filter(|line| {
        let trimmed = line.trim_start();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    })
}

fn parse_key_value(line: &str) -> Entry {
    match line.split_once('=') {
        Some((key, value)) => Entry::key_value(key, value),
        None => Entry::key_value(line, ""),
    }
}

fn parse_alias_record(line: &str) -> Entry {
    Entry::alias_record(
        quoted_field(line, "alias"),
        quoted_field(line, "username"),
        quoted_field(line, "pass"),
    )
}

/// Text between `name:"` and the next `"`, or empty.
fn quoted_field<'a>(line: &'a str, name: &str) -> &'a str {
    let marker = format!("{}:\"", name);
    line.find(&marker)
        .map(|start| &line[start + marker.len()..])
        .and_then(|rest| rest.find('"').map(|end| &rest[..end]))
        .unwrap_or("")
}
