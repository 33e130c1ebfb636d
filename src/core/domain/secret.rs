//! Resolved secret.

use zeroize::Zeroizing;

/// A secret chosen for an action.
///
/// `name` is the key or alias used in messages; `value` is the payload and is
/// wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    name: String,
    value: Zeroizing<String>,
}

impl ResolvedSecret {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    /// Key or alias the secret was resolved by
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Secret payload
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for ResolvedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
