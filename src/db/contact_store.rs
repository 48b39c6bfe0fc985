use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ContactResult;
use crate::model::Contact;

/// Default backing file, relative to the working directory.
pub const DEFAULT_PATH: &str = "contact_db.json";

/// The in-memory contact list and the JSON file it is synchronized with.
///
/// The file is the source of truth between runs. Every command reloads it
/// before acting and every mutation rewrites it whole.
#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contacts: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub(crate) fn contacts_mut(&mut self) -> &mut Vec<Contact> {
        &mut self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Replace the in-memory list with the file's contents.
    ///
    /// A missing file is created holding an empty list. Content that does
    /// not parse as a list of contacts is discarded with a warning and the
    /// store starts empty; the next save overwrites it. Any other read error
    /// also leaves the store empty and is returned.
    pub fn load(&mut self) -> ContactResult<()> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "creating empty contact file");
                self.contacts.clear();
                return self.save();
            }
            Err(e) => {
                self.contacts.clear();
                return Err(e.into());
            }
        };

        self.contacts = match serde_json::from_slice(&raw) {
            Ok(contacts) => contacts,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "contact file is unreadable, starting with an empty list"
                );
                Vec::new()
            }
        };
        debug!(count = self.contacts.len(), "loaded contacts");
        Ok(())
    }

    /// Overwrite the file with the full list, pretty-printed.
    pub fn save(&self) -> ContactResult<()> {
        let json = serde_json::to_string_pretty(&self.contacts)?;
        fs::write(&self.path, json)?;
        debug!(count = self.contacts.len(), path = %self.path.display(), "saved contacts");
        Ok(())
    }
}
