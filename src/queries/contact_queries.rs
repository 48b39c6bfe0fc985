use crate::db::ContactStore;
use crate::error::{ContactError, ContactResult};
use crate::model::Contact;
use crate::validation::normalize_number;

/// Which field a qualified search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Number,
    Email,
}

impl SearchField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(SearchField::Name),
            "number" => Some(SearchField::Number),
            "email" => Some(SearchField::Email),
            _ => None,
        }
    }
}

/// A parsed search term: either `field:value` or a bare term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Field(SearchField, String),
    Any(String),
}

impl SearchQuery {
    /// Splits on the first ':' only, so values may contain colons.
    pub fn parse(term: &str) -> ContactResult<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ContactError::EmptySearchTerm);
        }

        match term.split_once(':') {
            Some((field, value)) => {
                let field = SearchField::parse(field).ok_or_else(|| {
                    ContactError::InvalidSearchField {
                        field: field.trim().to_string(),
                    }
                })?;
                let value = value.trim();
                if value.is_empty() {
                    return Err(ContactError::EmptySearchTerm);
                }
                Ok(SearchQuery::Field(field, value.to_lowercase()))
            }
            None => Ok(SearchQuery::Any(term.to_lowercase())),
        }
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            SearchQuery::Field(SearchField::Name, value) => {
                contact.name.to_lowercase().contains(value.as_str())
            }
            SearchQuery::Field(SearchField::Email, value) => {
                contact.email.to_lowercase().contains(value.as_str())
            }
            SearchQuery::Field(SearchField::Number, value) => number_matches(contact, value),
            SearchQuery::Any(value) => {
                contact.name.to_lowercase().contains(value.as_str())
                    || contact.email.to_lowercase().contains(value.as_str())
                    || number_matches(contact, value)
            }
        }
    }
}

// A term of only spaces and hyphens normalizes to "" and would match every number.
fn number_matches(contact: &Contact, value: &str) -> bool {
    let needle = normalize_number(value);
    !needle.is_empty() && contact.normalized_number().to_lowercase().contains(&needle)
}

/// Reload and return every contact in insertion order.
pub fn list_contacts(store: &mut ContactStore) -> ContactResult<Vec<Contact>> {
    store.load()?;
    Ok(store.contacts().to_vec())
}

/// Reload and return the contacts matching `term`, in insertion order.
/// Blank terms are rejected before touching the file.
pub fn search_contacts(store: &mut ContactStore, term: &str) -> ContactResult<Vec<Contact>> {
    let query = SearchQuery::parse(term)?;
    store.load()?;
    Ok(store
        .contacts()
        .iter()
        .filter(|c| query.matches(c))
        .cloned()
        .collect())
}

/// Position of the first contact whose name equals `name`, ignoring case.
pub fn find_by_name(contacts: &[Contact], name: &str) -> Option<usize> {
    contacts.iter().position(|c| c.has_name(name))
}
