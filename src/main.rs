//! Keypick - pick a secret out of an encrypted file.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keypick::cli::output;
use keypick::cli::{execute, Cli};
use keypick::core::constants;
use keypick::error::{ActionError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keypick=debug")
        } else {
            EnvFilter::new("keypick=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Store(StoreError::DirNotFound(_)) => {
                Some("set secrets_dir in config.toml or pass --dir")
            }
            Error::Store(StoreError::FileNotFound(_)) => Some("run: keypick list"),
            Error::Action(ActionError::NoClipboardUtility) => {
                Some("set [clipboard] program in config.toml")
            }
            Error::Action(ActionError::InvalidVariableName(_)) => {
                Some("choose a variable name with --as NAME")
            }
            Error::NotInteractive => Some("pass the file, key and --action as arguments"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
