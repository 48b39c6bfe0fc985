mod common;

use common::TestFile;
use contacts::error::ContactError;
use contacts::ops::contact_ops;
use contacts::queries::contact_queries;

fn names(contacts: &[contacts::model::Contact]) -> Vec<&str> {
    contacts.iter().map(|c| c.name.as_str()).collect()
}

// ==========================================================================
// LIST TESTS
// ==========================================================================

#[test]
fn list_returns_all_in_insertion_order() {
    let (_file, mut store) = common::setup();
    let all = contact_queries::list_contacts(&mut store).unwrap();
    assert_eq!(names(&all), vec!["Alice", "Bob"]);
}

#[test]
fn list_of_new_store_is_empty() {
    let file = TestFile::new();
    let mut store = file.store();
    assert!(contact_queries::list_contacts(&mut store).unwrap().is_empty());
}

#[test]
fn list_reloads_from_file() {
    let (file, mut store) = common::setup();
    file.write(r#"[{"name": "Zed", "number": "9", "email": "z@x.com"}]"#);
    let all = contact_queries::list_contacts(&mut store).unwrap();
    assert_eq!(names(&all), vec!["Zed"]);
}

// ==========================================================================
// SEARCH TESTS
// ==========================================================================

#[test]
fn search_by_name_field() {
    let (_file, mut store) = common::setup();
    let found = contact_queries::search_contacts(&mut store, "name:ali").unwrap();
    assert_eq!(names(&found), vec!["Alice"]);
}

#[test]
fn search_by_email_field_matches_both() {
    let (_file, mut store) = common::setup();
    let found = contact_queries::search_contacts(&mut store, "email:x.com").unwrap();
    assert_eq!(names(&found), vec!["Alice", "Bob"]);
}

#[test]
fn search_by_number_field_ignores_separators() {
    let file = TestFile::new();
    let mut store = file.store();
    contact_ops::add_contact(&mut store, "Alice", "555-1234", "a@x.com").unwrap();
    contact_ops::add_contact(&mut store, "Bob", "555 9999", "b@x.com").unwrap();

    let found = contact_queries::search_contacts(&mut store, "Number:51 2").unwrap();
    assert_eq!(names(&found), vec!["Alice"]);
}

#[test]
fn search_number_with_letters_ignores_case() {
    let file = TestFile::new();
    let mut store = file.store();
    contact_ops::add_contact(&mut store, "Florist", "1-800-FLOWERS", "f@x.com").unwrap();
    contact_ops::add_contact(&mut store, "Bob", "222", "b@x.com").unwrap();

    let found = contact_queries::search_contacts(&mut store, "number:flowers").unwrap();
    assert_eq!(names(&found), vec!["Florist"]);

    let found = contact_queries::search_contacts(&mut store, "800flow").unwrap();
    assert_eq!(names(&found), vec!["Florist"]);
}

#[test]
fn search_without_field_checks_everything() {
    let (_file, mut store) = common::setup();
    assert_eq!(
        names(&contact_queries::search_contacts(&mut store, "BOB").unwrap()),
        vec!["Bob"]
    );
    assert_eq!(
        names(&contact_queries::search_contacts(&mut store, "a@").unwrap()),
        vec!["Alice"]
    );
    assert_eq!(
        names(&contact_queries::search_contacts(&mut store, "2-2").unwrap()),
        vec!["Bob"]
    );
}

#[test]
fn search_with_no_match_is_empty() {
    let (_file, mut store) = common::setup();
    assert!(contact_queries::search_contacts(&mut store, "carol")
        .unwrap()
        .is_empty());
}

#[test]
fn search_rejects_unknown_field() {
    let (_file, mut store) = common::setup();
    let result = contact_queries::search_contacts(&mut store, "phone:111");
    assert!(matches!(result, Err(ContactError::InvalidSearchField { .. })));
}

#[test]
fn search_rejects_blank_term_before_touching_the_file() {
    let file = TestFile::new();
    let mut store = file.store();
    let result = contact_queries::search_contacts(&mut store, "   ");

    assert!(matches!(result, Err(ContactError::EmptySearchTerm)));
    assert!(!file.path.exists());
}

// ==========================================================================
// FIND BY NAME TESTS
// ==========================================================================

#[test]
fn find_by_name_is_exact_and_case_insensitive() {
    let file = TestFile::new();
    let mut store = file.store();
    contact_ops::add_contact(&mut store, "john smith", "1", "j@x.com").unwrap();

    assert_eq!(contact_queries::find_by_name(store.contacts(), "JOHN SMITH"), Some(0));
    assert_eq!(contact_queries::find_by_name(store.contacts(), "john"), None);
}
