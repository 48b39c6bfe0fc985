use tracing::info;

use crate::db::ContactStore;
use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, ContactChanges};
use crate::queries::contact_queries::find_by_name;
use crate::validation::{self, clean_email, normalize_number, title_case};

/// Result of a delete request that found its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Contact),
    Cancelled,
}

pub fn add_contact(
    store: &mut ContactStore,
    name: &str,
    number: &str,
    email: &str,
) -> ContactResult<Contact> {
    store.load()?;

    let name = validation::non_blank(name, "name")?;
    let number = validation::non_blank(number, "number")?;
    let email = validation::non_blank(&clean_email(email), "email")?;
    let email = validation::email(&email)?;

    let normalized = normalize_number(&number);
    if store
        .contacts()
        .iter()
        .any(|c| c.normalized_number() == normalized)
    {
        return Err(ContactError::DuplicateNumber { number });
    }
    if store.contacts().iter().any(|c| c.email == email) {
        return Err(ContactError::DuplicateEmail { email });
    }

    let contact = Contact::new(title_case(&name), number, email);
    store.contacts_mut().push(contact.clone());
    store.save()?;

    info!(name = %contact.name, "added contact");
    Ok(contact)
}

/// Applies `changes` to the first contact named `name`.
///
/// Blank responses keep the current value. A new email is validated before
/// anything is touched, so a bad one leaves the record and file as they were.
/// Uniqueness against other contacts is not re-checked.
pub fn update_contact(
    store: &mut ContactStore,
    name: &str,
    changes: &ContactChanges,
) -> ContactResult<Contact> {
    store.load()?;

    let index = find_by_name(store.contacts(), name).ok_or_else(|| ContactError::NotFound {
        name: name.trim().to_string(),
    })?;

    let new_name = validation::non_blank(&changes.name, "name")
        .ok()
        .map(|n| title_case(&n));
    let new_number = validation::non_blank(&changes.number, "number").ok();
    let new_email = match validation::non_blank(&clean_email(&changes.email), "email") {
        Ok(email) => Some(validation::email(&email)?),
        Err(_) => None,
    };

    let contact = &mut store.contacts_mut()[index];
    if let Some(n) = new_name {
        contact.name = n;
    }
    if let Some(n) = new_number {
        contact.number = n;
    }
    if let Some(e) = new_email {
        contact.email = e;
    }
    let updated = contact.clone();

    store.save()?;
    info!(name = %updated.name, "updated contact");
    Ok(updated)
}

/// Removes the first contact named `name` if `confirm` approves it.
pub fn delete_contact<F>(
    store: &mut ContactStore,
    name: &str,
    confirm: F,
) -> ContactResult<DeleteOutcome>
where
    F: FnOnce(&Contact) -> bool,
{
    store.load()?;

    let index = find_by_name(store.contacts(), name).ok_or_else(|| ContactError::NotFound {
        name: name.trim().to_string(),
    })?;

    if !confirm(&store.contacts()[index]) {
        return Ok(DeleteOutcome::Cancelled);
    }

    let removed = store.contacts_mut().remove(index);
    store.save()?;
    info!(name = %removed.name, "deleted contact");
    Ok(DeleteOutcome::Deleted(removed))
}
