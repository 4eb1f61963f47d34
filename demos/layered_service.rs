//! Layered Service Example
//!
//! A repository, a service and a handler each add what they know to an error
//! as it travels up: classification at the bottom, annotations in the middle,
//! and logging plus retry decisions at the top.
//!
//! Run with: `cargo run --example layered_service`

use error_taxon::common::{TEMPORARY, TIMEOUT_ELAPSED};
use error_taxon::traits::RETRY_AFTER_MS;
use error_taxon::{decorate, Class, Error, Namespace, Result, ResultExt, TransientError};
use std::io;
use std::time::Instant;

struct Taxonomy {
    unavailable: Class,
    not_found: Class,
}

impl Taxonomy {
    fn new() -> Self {
        let storage = Namespace::new("storage", &[]);
        Self {
            unavailable: storage.class("unavailable", &[TEMPORARY.clone()]),
            not_found: storage.class("not_found", &[]),
        }
    }
}

// Repository layer: turns driver errors into classified errors.
fn fetch_order(taxonomy: &Taxonomy, id: u64) -> Result<String> {
    match id {
        0 => Err(taxonomy.not_found.error("order does not exist").with("order_id", id)),
        7 => Err::<String, _>(io::Error::from(io::ErrorKind::ConnectionRefused))
            .wrap_err(&taxonomy.unavailable, "connecting to orders db")
            .map_err(|err| err.with(RETRY_AFTER_MS, 200u64)),
        13 => Err(TIMEOUT_ELAPSED.error("query exceeded 2s").with("order_id", id)),
        _ => Ok(format!("order #{id}")),
    }
}

// Service layer: adds ownership and timing.
fn order_summary(taxonomy: &Taxonomy, id: u64) -> Result<String> {
    let started = Instant::now();
    fetch_order(taxonomy, id).map_err(|err| {
        decorate(err, "building order summary")
            .annotate()
            .owner("orders-team")
            .domain("orders")
            .tag("order_id", id.to_string())
            .since(started)
            .done()
    })
}

// Handler layer: decides what the caller sees.
fn handle(taxonomy: &Taxonomy, id: u64) -> String {
    match order_summary(taxonomy, id) {
        Ok(summary) => summary,
        Err(err) => respond(taxonomy, &err),
    }
}

fn respond(taxonomy: &Taxonomy, err: &Error) -> String {
    err.record(tracing::Level::WARN);

    if err.is_transient() {
        let wait = err.retry_after_hint().map_or(0, |hint| hint.as_millis());
        format!("503 retry in {wait}ms ({})", err.class())
    } else if err.extends(&taxonomy.not_found) {
        "404 not found".to_owned()
    } else {
        format!("500 {}", err.public().unwrap_or("internal error"))
    }
}

fn main() {
    let taxonomy = Taxonomy::new();

    for id in [1, 0, 7, 13] {
        println!("GET /orders/{id} -> {}", handle(&taxonomy, id));
    }

    // Panics in a handler are turned into an error at one explicit boundary.
    let boundary = TIMEOUT_ELAPSED.error("handler aborted");
    let recovered: Result<()> = boundary.recover(|| panic!("poisoned cache"));
    if let Err(err) = recovered {
        println!("\nrecovered: {err}");
    }
}
