//! Pick command.
//!
//! Interactive front-end: choose a secret file, then a key or alias, then an
//! action. Any choice given as an argument skips its menu. Menus are drawn on
//! stderr, so `eval "$(keypick pick)"` works for exports.

use std::io::{self, IsTerminal};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use tracing::debug;

use crate::cli::{get, output, Context};
use crate::core::domain::Action;
use crate::core::lookup;
use crate::error::{Error, ParseError, Result, StoreError};

const ACTIONS: &[&str] = &["copy", "export"];

/// Run the interactive picker.
pub fn execute(
    ctx: &Context,
    file: Option<String>,
    query: Option<String>,
    action: Option<String>,
    env_var: Option<String>,
) -> Result<()> {
    // Reject a bad action before anything is decrypted
    let preset: Option<Action> = action.as_deref().map(str::parse::<Action>).transpose()?;

    let needs_menu = file.is_none() || query.is_none() || preset.is_none();
    if needs_menu && !io::stdin().is_terminal() {
        return Err(Error::NotInteractive);
    }

    let secret_file = match file {
        Some(name) => ctx.dir.open(&name)?,
        None => {
            let files = ctx.dir.list()?;
            if files.is_empty() {
                return Err(StoreError::NoFiles(ctx.dir.root().display().to_string()).into());
            }
            let labels: Vec<String> = files.iter().map(|f| f.name()).collect();
            let index = select("Secret file", &labels)?;
            files[index].clone()
        }
    };

    let entries = secret_file.load(&ctx.config.decryptor())?;

    let query = match query {
        Some(q) => q,
        None => {
            let names = lookup::names(&entries);
            if names.is_empty() {
                return Err(ParseError::EmptyOrMissing.into());
            }
            let index = select("Secret", &names)?;
            names[index].to_string()
        }
    };

    let secret = lookup::resolve(&entries, secret_file.format(), &query)?;
    drop(entries);

    let action = match preset {
        Some(action) => action,
        None => ACTIONS[select("Action", ACTIONS)?].parse::<Action>()?,
    };
    let action = match action {
        Action::Export { env_var: None } => Action::Export { env_var },
        Action::Copy if env_var.is_some() => {
            output::warn("--as only applies to export; ignored");
            Action::Copy
        }
        other => other,
    };

    debug!(file = %secret_file.name(), %action, "picked");
    get::perform(ctx, &secret, &action)
}

/// Show a menu on stderr and return the chosen index.
fn select<T: ToString>(prompt: &str, items: &[T]) -> Result<usize> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}
