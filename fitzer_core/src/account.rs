//! Local sign-in.
//!
//! There is no authentication: signing in just records a name and a
//! username on this machine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

const MISSING_FIELDS: &str = "Please enter both name and username.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub username: String,
}

impl UserAccount {
    /// Build an account from raw input
    ///
    /// Both fields are trimmed and must be non-empty. The username is stored
    /// lowercase.
    pub fn new(name: &str, username: &str) -> Result<Self> {
        let name = name.trim();
        let username = username.trim();
        if name.is_empty() || username.is_empty() {
            return Err(Error::Account(MISSING_FIELDS.into()));
        }

        Ok(Self {
            name: name.to_string(),
            username: username.to_lowercase(),
        })
    }

    /// `Name (@username)`
    pub fn display_name(&self) -> String {
        format!("{} (@{})", self.name, self.username)
    }
}
