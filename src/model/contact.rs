use serde::{Deserialize, Serialize};

use crate::validation::normalize_number;

/// A single address book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub number: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, number: String, email: String) -> Self {
        Self {
            name,
            number,
            email,
        }
    }

    /// The number with spaces and hyphens removed.
    pub fn normalized_number(&self) -> String {
        normalize_number(&self.number)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Raw responses for an update. A blank response keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ContactChanges {
    pub name: String,
    pub number: String,
    pub email: String,
}

impl ContactChanges {
    pub fn new(name: &str, number: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
            email: email.to_string(),
        }
    }
}
