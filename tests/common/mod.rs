#![allow(dead_code)]

use std::path::PathBuf;

use contacts::db::ContactStore;
use contacts::ops::contact_ops;

/// A unique contact file in the temp dir, removed on drop.
pub struct TestFile {
    pub path: PathBuf,
}

impl TestFile {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("contacts-test-{}.json", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn store(&self) -> ContactStore {
        ContactStore::new(&self.path)
    }

    pub fn write(&self, content: &str) {
        std::fs::write(&self.path, content).unwrap();
    }

    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }
}

impl Drop for TestFile {
    fn drop(&mut self) {
        if self.path.is_dir() {
            let _ = std::fs::remove_dir(&self.path);
        } else {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// A store holding Alice and Bob.
pub fn setup() -> (TestFile, ContactStore) {
    let file = TestFile::new();
    let mut store = file.store();
    contact_ops::add_contact(&mut store, "Alice", "111", "a@x.com").unwrap();
    contact_ops::add_contact(&mut store, "Bob", "222", "b@x.com").unwrap();
    (file, store)
}
