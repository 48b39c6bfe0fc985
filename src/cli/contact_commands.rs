use crate::cli::context::{confirm, prompt, CLIContext};
use crate::cli::table;
use crate::model::{Contact, ContactChanges};
use crate::ops::contact_ops::{self, DeleteOutcome};
use crate::queries::contact_queries::{self, find_by_name};

pub fn add(ctx: &mut CLIContext) {
    let Some(name) = prompt("Name: ") else { return };
    let Some(number) = prompt("Phone number: ") else { return };
    let Some(email) = prompt("Email: ") else { return };

    match contact_ops::add_contact(&mut ctx.store, &name, &number, &email) {
        Ok(contact) => println!("Contact '{}' added.", contact.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn list(ctx: &mut CLIContext) {
    match contact_queries::list_contacts(&mut ctx.store) {
        Ok(contacts) => print_contacts(&contacts, "No contacts found."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn search(ctx: &mut CLIContext) {
    let Some(term) = prompt("Search (term, or name:/number:/email:<value>): ") else {
        return;
    };

    match contact_queries::search_contacts(&mut ctx.store, &term) {
        Ok(found) => print_contacts(&found, "No match found."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn update(ctx: &mut CLIContext) {
    let Some(name) = prompt("Name of the contact to update: ") else { return };

    // Look the contact up first so the prompts can show current values.
    if let Err(e) = ctx.store.load() {
        ctx.print_error(&e);
        return;
    }
    let current = match find_by_name(ctx.store.contacts(), &name) {
        Some(i) => ctx.store.contacts()[i].clone(),
        None => {
            println!("Contact '{}' not found.", name);
            return;
        }
    };

    println!("Press Enter to keep the current value.");
    let Some(new_name) = prompt(&format!("Name [{}]: ", current.name)) else { return };
    let Some(new_number) = prompt(&format!("Phone number [{}]: ", current.number)) else { return };
    let Some(new_email) = prompt(&format!("Email [{}]: ", current.email)) else { return };

    let changes = ContactChanges::new(&new_name, &new_number, &new_email);
    match contact_ops::update_contact(&mut ctx.store, &name, &changes) {
        Ok(contact) => println!("Contact '{}' updated.", contact.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext) {
    let Some(name) = prompt("Name of the contact to delete: ") else { return };

    let result = contact_ops::delete_contact(&mut ctx.store, &name, |c| {
        confirm(&format!("Are you sure you want to delete '{}'? (y/n): ", c.name))
    });

    match result {
        Ok(DeleteOutcome::Deleted(contact)) => println!("Contact '{}' deleted.", contact.name),
        Ok(DeleteOutcome::Cancelled) => println!("Deletion cancelled."),
        Err(e) => ctx.print_error(&e),
    }
}

fn print_contacts(contacts: &[Contact], empty_message: &str) {
    if contacts.is_empty() {
        println!("{}", empty_message);
        return;
    }
    println!();
    print!("{}", table::render(contacts));
    println!();
}
