//! Constants used throughout keypick.
//!
//! Centralizes magic strings and configuration values.

/// Basename of the file holding alias records.
pub const ALIAS_FILE: &str = "pass";

/// Default secrets directory relative to HOME (~/.secrets).
pub const SECRETS_DIR: &str = ".secrets";

/// Config file path relative to the platform config directory.
pub const CONFIG_FILE: &str = "keypick/config.toml";

/// Default decryption program.
pub const DECRYPT_PROGRAM: &str = "gpg";

/// Default decryption arguments; the file path is appended.
pub const DECRYPT_ARGS: &[&str] = &["--quiet", "--batch", "--decrypt"];

/// Clipboard utilities probed in order, with their arguments.
pub const CLIPBOARD_CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "KEYPICK_LOG";
