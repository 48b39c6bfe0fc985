use std::io::{self, Write};

use crate::db::ContactStore;
use crate::error::ContactError;

pub struct CLIContext {
    pub store: ContactStore,
}

impl CLIContext {
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    pub fn print_error(&self, e: &ContactError) {
        println!("Error: {}", e);
    }
}

/// Prompt and read a line from stdin. Returns None on EOF.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}

/// Read a line, trimmed.
pub fn prompt(message: &str) -> Option<String> {
    read_line(message).map(|s| s.trim().to_string())
}

/// Ask a yes/no question. Only "y" or "yes" count as yes; EOF is no.
pub fn confirm(question: &str) -> bool {
    prompt(question).map(|s| is_yes(&s)).unwrap_or(false)
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
