//! Test support utilities for keypick integration tests.
//!
//! Provides an isolated secrets directory and config for each test.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Secret files are stored as plaintext and "decrypted" with `cat`; the
/// clipboard is a shell command that writes stdin to a file in `home`.
/// No process-global state is mutated, so tests can run in parallel.
pub struct Test {
    /// Secrets directory
    pub dir: TempDir,
    /// Temporary home directory holding the config and clipboard capture
    pub home: TempDir,
}

impl Test {
    /// Create an empty secrets directory with the default test config.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let t = Self { dir, home };

        let clipboard = t.clipboard_path();
        t.write_config(&format!(
            "[decrypt]\nprogram = \"cat\"\nargs = []\n\n\
             [clipboard]\nprogram = \"sh\"\nargs = [\"-c\", \"cat > '{}'\"]\n",
            clipboard.display()
        ));
        t
    }

    /// Create a test environment with the given secret files.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, content) in files {
            t.write_file(name, content);
        }
        t
    }

    /// Environment with the standard key-value and alias files.
    pub fn standard() -> Self {
        Self::with_files(&[("api", API_FILE), ("pass", PASS_FILE)])
    }

    /// Write a secret file.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("failed to write secret file");
    }

    /// Replace the config file.
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("failed to write config");
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    pub fn clipboard_path(&self) -> PathBuf {
        self.home.path().join("clipboard")
    }

    /// Bytes last written to the test clipboard.
    pub fn clipboard(&self) -> Option<Vec<u8>> {
        std::fs::read(self.clipboard_path()).ok()
    }
}
