use std::path::PathBuf;

use contacts::db::contact_store::DEFAULT_PATH;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never mix with the tables on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Contact Manager - a command-line address book");
                println!();
                println!("Usage: contacts [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Contact file path (default: {})", DEFAULT_PATH);
                println!("  -h, --help          Show this help");
                println!();
                println!("Set RUST_LOG (e.g. RUST_LOG=debug) to change log output on stderr.");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = db_path.unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
    if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: cannot create directory {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    contacts::cli::run(&db_path);
}
