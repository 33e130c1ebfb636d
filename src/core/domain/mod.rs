//! Domain types.

mod action;
mod entry;
mod format;
mod secret;

pub use action::Action;
pub use entry::Entry;
pub use format::Format;
pub use secret::ResolvedSecret;
