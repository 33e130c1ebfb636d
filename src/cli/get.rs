//! Copy and export commands.
//!
//! Non-interactive: the file and the key or alias come from arguments.

use std::io::{self, IsTerminal};

use tracing::info;

use crate::cli::{output, Context};
use crate::core::dispatch::{self, ShellExport};
use crate::core::domain::{Action, ResolvedSecret};
use crate::core::lookup;
use crate::error::Result;

/// Copy a secret to the clipboard.
pub fn copy(ctx: &Context, file: &str, query: &str) -> Result<()> {
    let secret = resolve(ctx, file, query)?;
    perform(ctx, &secret, &Action::Copy)
}

/// Print `export NAME='value'` for a secret.
pub fn export(ctx: &Context, file: &str, query: &str, env_var: Option<String>) -> Result<()> {
    let secret = resolve(ctx, file, query)?;
    perform(ctx, &secret, &Action::Export { env_var })
}

/// Decrypt `file` once and resolve `query` in it.
fn resolve(ctx: &Context, file: &str, query: &str) -> Result<ResolvedSecret> {
    let secret_file = ctx.dir.open(file)?;
    let entries = secret_file.load(&ctx.config.decryptor())?;
    Ok(lookup::resolve(&entries, secret_file.format(), query)?)
}

/// Dispatch `action` and report the outcome on stderr.
pub(crate) fn perform(ctx: &Context, secret: &ResolvedSecret, action: &Action) -> Result<()> {
    let clipboard = ctx.config.clipboard()?;
    let mut env = ShellExport::with_syntax(io::stdout().lock(), ctx.syntax);

    info!(name = secret.name(), %action, "performing action");
    dispatch::dispatch(secret, action, &clipboard, &mut env)?;

    match action {
        Action::Copy => {
            output::success(&format!("copied {} to clipboard", output::key(secret.name())));
        }
        Action::Export { .. } => {
            if io::stdout().is_terminal() {
                output::hint("printed only; to apply it, run: eval \"$(keypick shell-init bash)\"");
            }
        }
    }

    Ok(())
}
