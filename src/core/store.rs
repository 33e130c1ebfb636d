//! Secrets directory.
//!
//! Secret files live flat in one directory. Each file's [`Format`] is fixed
//! when it is opened and the file is only ever read.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::cipher::Decryptor;
use crate::core::domain::{Entry, Format};
use crate::core::parser;
use crate::error::{Result, StoreError};

/// An encrypted secret file tagged with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretFile {
    path: PathBuf,
    format: Format,
}

impl SecretFile {
    /// Tag `path` with the format inferred from its name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::infer(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// File name shown in menus and listings.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Decrypt once and parse.
    ///
    /// The plaintext is dropped (and wiped) before returning.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::EmptyOrMissing` if the file is missing, cannot be
    /// decrypted, or holds no entries.
    pub fn load(&self, decryptor: &dyn Decryptor) -> Result<Vec<Entry>> {
        debug!(
            path = %self.path.display(),
            format = %self.format,
            decryptor = decryptor.name(),
            "loading secret file"
        );
        let plaintext = decryptor.decrypt(&self.path)?;
        Ok(parser::parse(&plaintext, self.format)?)
    }
}

/// Directory holding the secret files.
#[derive(Debug, Clone)]
pub struct SecretsDir {
    root: PathBuf,
}

impl SecretsDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Secret files sorted by name.
    ///
    /// Hidden files and subdirectories are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DirNotFound` if the directory does not exist.
    pub fn list(&self) -> Result<Vec<SecretFile>> {
        if !self.root.is_dir() {
            return Err(StoreError::DirNotFound(self.root.display().to_string()).into());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if hidden || !path.is_file() {
                continue;
            }
            files.push(SecretFile::new(path));
        }
        files.sort_by_key(|f| f.name());

        debug!(dir = %self.root.display(), files = files.len(), "listed secret files");
        Ok(files)
    }

    /// Open a secret file by name.
    ///
    /// Names are plain file names; anything with a path separator is
    /// rejected so lookups stay inside the directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileNotFound` if no such file exists.
    pub fn open(&self, name: &str) -> Result<SecretFile> {
        let plain = Path::new(name)
            .file_name()
            .is_some_and(|n| n == std::ffi::OsStr::new(name));
        let path = self.root.join(name);

        if !plain || !path.is_file() {
            return Err(StoreError::FileNotFound(name.to_string()).into());
        }

        Ok(SecretFile::new(path))
    }
}
