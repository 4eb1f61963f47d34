//! Quick Start Example
//!
//! Defines a small taxonomy, creates and wraps errors, and prints them.
//!
//! Run with: `cargo run --example quick_start`

use error_taxon::prelude::*;
use std::io;

/// Simulates reading a configuration file.
fn read_config(path: &str) -> Result<String, io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, format!("{path}: no such file")))
}

fn load_config(missing: &Class) -> Result<String> {
    let raw = read_config("app.toml").wrap_err(missing, "loading configuration")?;
    Ok(raw.to_uppercase())
}

fn init_app(missing: &Class) -> Result<()> {
    let _config = load_config(missing).decorate("initializing application")?;
    Ok(())
}

fn main() {
    println!("=== error-taxon Quick Start ===\n");

    let config = Namespace::new("config", &[]);
    let missing = config.class("missing", &[common::NOT_FOUND.clone()]);

    // 1. Classified errors
    let err = new_error!(missing, "no entry for key {:?}", "database.url").with("source", "env");
    println!("1. Summary:\n{err}");

    // 2. Wrapping keeps classification
    match init_app(&missing) {
        Ok(()) => println!("Application initialized successfully!"),
        Err(e) => {
            println!("\n2. Wrapped error:\n{e}");
            println!("   class: {}, not found: {}", e.class(), e.has(&common::NOT_FOUND));

            // 3. Summary plus causal stack trace
            println!("\n3. Rich display:\n{:#}", e);
        },
    }
}
