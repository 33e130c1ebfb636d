//! Keypick - pick a secret out of an encrypted file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── pick          # Interactive menus
//! │   ├── get           # copy / export by name
//! │   ├── list          # List files or names
//! │   ├── shell_init    # Shell wrapper for export
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # Decryption backends (gpg)
//!     ├── clipboard     # Clipboard backends
//!     ├── config        # config.toml management
//!     ├── domain/       # Entry, Format, Action, ResolvedSecret
//!     ├── parser        # Plaintext -> entries
//!     ├── lookup        # Key / alias resolution
//!     ├── dispatch      # Copy / export
//!     └── store         # Secrets directory
//! ```
//!
//! # Flow
//!
//! A secret file is decrypted once, parsed according to the format implied
//! by its name, searched for one key or alias, and the value is handed to
//! exactly one action. Nothing decrypted is ever written to disk.

pub mod cli;
pub mod core;
pub mod error;
