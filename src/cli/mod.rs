pub mod context;
pub mod contact_commands;
pub mod table;

use std::path::Path;

use tracing::debug;

use crate::db::ContactStore;
use context::{read_line, CLIContext};

/// A numbered entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the interactive menu loop against the contact file at `db_path`.
pub fn run(db_path: &Path) {
    let mut ctx = CLIContext::new(ContactStore::new(db_path));

    // Create the file up front so a bad path is reported before the menu.
    if let Err(e) = ctx.store.load() {
        eprintln!("Error opening {}: {}", db_path.display(), e);
        return;
    }

    menu_loop(&mut ctx);
}

fn menu_loop(ctx: &mut CLIContext) {
    loop {
        print_menu();
        let input = match read_line("Enter your choice: ") {
            Some(s) => s,
            None => break,
        };

        let choice = MenuChoice::parse(&input);
        debug!(?choice, "menu selection");
        match choice {
            Some(MenuChoice::Add) => contact_commands::add(ctx),
            Some(MenuChoice::List) => contact_commands::list(ctx),
            Some(MenuChoice::Search) => contact_commands::search(ctx),
            Some(MenuChoice::Update) => contact_commands::update(ctx),
            Some(MenuChoice::Delete) => contact_commands::delete(ctx),
            Some(MenuChoice::Exit) => {
                println!("See you next time.");
                break;
            }
            None => println!("Wrong Input! Enter again..."),
        }
        println!();
    }
}

fn print_menu() {
    println!(r#"    ------- Contact Manager -------
1. Add new contact
2. List all contacts
3. Search contact
4. Update contact
5. Delete contact
6. Exit"#);
}
