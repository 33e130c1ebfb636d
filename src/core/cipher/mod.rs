//! Decryption backends.
//!
//! Decryption is delegated to an external program. Backends implement
//! [`Decryptor`]; the default is [`CommandDecryptor`] running `gpg`.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Decryptor` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use std::path::Path;

use zeroize::Zeroizing;

use crate::error::Result;

mod gpg;

pub use gpg::CommandDecryptor;

/// Decryption backend trait.
///
/// A failed decryption carries no detail: implementations return
/// `ParseError::EmptyOrMissing` whatever went wrong, so callers cannot tell an
/// undecryptable file from an empty one.
pub trait Decryptor {
    /// Decrypt the file at `path` into plaintext.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::EmptyOrMissing` if the file cannot be decrypted.
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}
