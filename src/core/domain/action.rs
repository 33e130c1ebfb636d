//! Requested action.

use std::str::FromStr;

use crate::error::ActionError;

/// What to do with a resolved secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Copy the value to the clipboard.
    Copy,
    /// Export the value as an environment variable.
    ///
    /// `env_var` defaults to the secret's name.
    Export { env_var: Option<String> },
}

impl Action {
    /// Export under the secret's own name.
    pub fn export() -> Self {
        Self::Export { env_var: None }
    }

    /// Export under an explicit variable name.
    pub fn export_as(env_var: impl Into<String>) -> Self {
        Self::Export {
            env_var: Some(env_var.into()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Export { .. } => "export",
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" => Ok(Self::Copy),
            "export" => Ok(Self::export()),
            _ => Err(ActionError::InvalidAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
