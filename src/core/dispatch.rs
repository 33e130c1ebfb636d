//! Action dispatcher.
//!
//! Performs the requested action on a resolved secret. The value only leaves
//! the process through the collaborator the action names: the clipboard for
//! copy, the [`Environment`] sink for export.
//!
//! A standalone binary cannot change its parent shell's environment, so the
//! CLI exports through [`ShellExport`], which prints an `export` line for the
//! caller to `eval`. [`ProcessEnv`] is for embedding contexts where setting
//! the variable on the current process (and its children) is what's wanted.

use std::io::Write;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::clipboard::Clipboard;
use crate::core::domain::{Action, ResolvedSecret};
use crate::error::{ActionError, Result};

/// Destination for exported variables.
pub trait Environment {
    /// Set `name` to `value`.
    fn export(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Shell dialect of the lines [`ShellExport`] writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syntax {
    /// `export NAME='value'` for sh, bash and zsh.
    #[default]
    Posix,
    /// `set -gx NAME 'value'`.
    Fish,
}

/// Writes one assignment line per export for a shell to evaluate.
#[derive(Debug)]
pub struct ShellExport<W: Write> {
    out: W,
    syntax: Syntax,
}

impl<W: Write> ShellExport<W> {
    /// POSIX `export` lines.
    pub fn new(out: W) -> Self {
        Self::with_syntax(out, Syntax::Posix)
    }

    pub fn with_syntax(out: W, syntax: Syntax) -> Self {
        Self { out, syntax }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Environment for ShellExport<W> {
    fn export(&mut self, name: &str, value: &str) -> Result<()> {
        reject_nul(name, value)?;
        match self.syntax {
            Syntax::Posix => {
                writeln!(self.out, "export {}={}", name, posix_quote(value).as_str())?
            }
            Syntax::Fish => {
                writeln!(self.out, "set -gx {} {}", name, fish_quote(value).as_str())?
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Sets variables on the current process.
///
/// Visible to this process and the children it spawns afterwards, never to
/// the parent shell.
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn export(&mut self, name: &str, value: &str) -> Result<()> {
        // set_var panics on these
        validate_var_name(name)?;
        reject_nul(name, value)?;
        std::env::set_var(name, value);
        Ok(())
    }
}

/// Perform `action` on `secret`.
///
/// # Errors
///
/// Returns `ActionError::InvalidVariableName` for an export target that is not
/// a shell identifier, or whatever the collaborator reports.
pub fn dispatch(
    secret: &ResolvedSecret,
    action: &Action,
    clipboard: &dyn Clipboard,
    env: &mut dyn Environment,
) -> Result<()> {
    match action {
        Action::Copy => {
            debug!(name = secret.name(), "dispatching copy");
            clipboard.copy(secret.value())?;
            info!(name = secret.name(), "copied to clipboard");
        }
        Action::Export { env_var } => {
            let var = env_var.as_deref().unwrap_or(secret.name());
            validate_var_name(var)?;
            debug!(name = secret.name(), var, "dispatching export");
            env.export(var, secret.value())?;
        }
    }
    Ok(())
}

/// Check that `name` is a shell identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_var_name(name: &str) -> std::result::Result<(), ActionError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ActionError::InvalidVariableName(name.to_string()))
    }
}

/// Environment values cannot carry NUL bytes.
fn reject_nul(name: &str, value: &str) -> std::result::Result<(), ActionError> {
    if value.contains('\0') {
        return Err(ActionError::NulInValue(name.to_string()));
    }
    Ok(())
}

/// POSIX single-quote `value`.
///
/// Capacity covers the worst case so the buffer never reallocates.
fn posix_quote(value: &str) -> Zeroizing<String> {
    let mut quoted = Zeroizing::new(String::with_capacity(value.len() * 4 + 2));
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

/// Fish single-quote `value`. Inside fish quotes `\\` and `\'` are escapes.
fn fish_quote(value: &str) -> Zeroizing<String> {
    let mut quoted = Zeroizing::new(String::with_capacity(value.len() * 2 + 2));
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\\' || ch == '\'' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}
