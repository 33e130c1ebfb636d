//! Command-line interface.

pub mod completions;
pub mod get;
pub mod list;
pub mod output;
pub mod pick;
pub mod shell_init;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::config::Config;
use crate::core::dispatch::Syntax;
use crate::core::store::SecretsDir;
use crate::error::Result;

/// Keypick - pick a secret out of an encrypted file.
#[derive(Parser)]
#[command(
    name = "keypick",
    about = "Copy or export a secret from a gpg-encrypted file",
    version,
    after_help = "Export needs a shell wrapper: eval \"$(keypick shell-init bash)\""
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the encrypted secret files
    #[arg(long, global = true, env = "KEYPICK_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (default: ~/.config/keypick/config.toml)
    #[arg(long, global = true, env = "KEYPICK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shell that evaluates export lines (set by the shell-init wrapper)
    #[arg(
        long,
        global = true,
        env = "KEYPICK_SHELL",
        value_enum,
        value_name = "SHELL",
        hide = true
    )]
    pub export_shell: Option<InitShell>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Choose a file, a secret and an action from menus
    Pick {
        /// Secret file (skips the file menu)
        file: Option<String>,
        /// Key or alias (skips the secret menu)
        query: Option<String>,
        /// Action to perform: copy or export (skips the action menu)
        #[arg(short, long)]
        action: Option<String>,
        /// Variable name for export (default: the key or alias)
        #[arg(long = "as", value_name = "NAME")]
        env_var: Option<String>,
    },

    /// Copy a secret to the clipboard
    Copy {
        /// Secret file name
        file: String,
        /// Key or alias
        query: String,
    },

    /// Print an export line for a secret
    Export {
        /// Secret file name
        file: String,
        /// Key or alias
        query: String,
        /// Variable name (default: the key or alias)
        #[arg(long = "as", value_name = "NAME")]
        env_var: Option<String>,
    },

    /// List secret files, or the keys and aliases in one file
    List {
        /// Secret file name
        file: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a shell function that evaluates export lines
    ShellInit {
        #[arg(value_enum)]
        shell: InitShell,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Shells that can evaluate export lines.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitShell {
    Bash,
    Zsh,
    Fish,
}

impl From<InitShell> for Syntax {
    fn from(shell: InitShell) -> Self {
        match shell {
            InitShell::Bash | InitShell::Zsh => Syntax::Posix,
            InitShell::Fish => Syntax::Fish,
        }
    }
}

/// Resolved configuration shared by commands.
pub struct Context {
    pub config: Config,
    pub dir: SecretsDir,
    /// Dialect of printed export lines.
    pub syntax: Syntax,
}

impl Context {
    /// Load config and locate the secrets directory.
    pub fn load(dir: Option<&Path>, config: Option<&Path>, syntax: Syntax) -> Result<Self> {
        let config = Config::load(config)?;
        let dir = SecretsDir::new(config.secrets_dir(dir)?);
        debug!(dir = %dir.root().display(), ?syntax, "using secrets directory");
        Ok(Self {
            config,
            dir,
            syntax,
        })
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    // These never touch the secrets directory
    match cli.command {
        ShellInit { shell } => return shell_init::execute(shell),
        Completions { shell } => return completions::execute(shell),
        _ => {}
    }

    let syntax = cli.export_shell.map(Syntax::from).unwrap_or_default();
    let ctx = Context::load(cli.dir.as_deref(), cli.config.as_deref(), syntax)?;

    match cli.command {
        Pick {
            file,
            query,
            action,
            env_var,
        } => pick::execute(&ctx, file, query, action, env_var),
        Copy { file, query } => get::copy(&ctx, &file, &query),
        Export {
            file,
            query,
            env_var,
        } => get::export(&ctx, &file, &query, env_var),
        List { file, json } => list::execute(&ctx, file.as_deref(), json),
        ShellInit { .. } | Completions { .. } => Ok(()),
    }
}
