use error_taxon::common::ILLEGAL_ARGUMENT;
use error_taxon::{Error, Namespace, ResultExt};
use std::io;

fn read_port(raw: &str) -> Result<u16, Error> {
    raw.parse::<u16>().wrap_err(&ILLEGAL_ARGUMENT, "invalid port")
}

#[test]
fn wrap_err_classifies_foreign_errors() {
    let err = read_port("http").unwrap_err();

    assert!(err.extends(&ILLEGAL_ARGUMENT));
    assert!(err.summary().starts_with("common.illegal_argument: invalid port, cause: "));
    assert_eq!(read_port("8080").unwrap(), 8080);
}

#[test]
fn decorate_keeps_the_inner_classification() {
    let missing = Namespace::new("result_ext_it", &[]).class("missing", &[]);
    let failed: Result<(), Error> = Err(missing.error("no row"));

    let err = failed.decorate("loading user").unwrap_err();
    assert_eq!(err.class(), &missing);
    assert_eq!(err.to_string(), "loading user, cause: result_ext_it.missing: no row");
}

#[test]
fn enhance_err_links_traces() {
    let class = Namespace::new("result_ext_enhance", &[]).class("c", &[]);
    let failed: Result<(), Error> = Err(class.error("root"));

    let err = failed.enhance_err("outer").unwrap_err();
    assert!(err.stack_trace().and_then(|trace| trace.cause()).is_some());
}

#[test]
fn with_property_attaches_to_structured_errors_directly() {
    let class = Namespace::new("result_ext_prop", &[]).class("c", &[]);
    let failed: Result<(), Error> = Err(class.error("boom"));

    let err = failed.with_property("request_id", 42u64).unwrap_err();
    assert!(!err.is_transparent());
    assert_eq!(err.property("request_id").bind::<u64>(), Some(42));
}

#[test]
fn with_property_on_foreign_errors_wraps_transparently() {
    let failed: Result<(), io::Error> = Err(io::Error::other("closed"));

    let err = failed.with_property("peer", "10.0.0.1").unwrap_err();
    assert!(err.is_transparent());
    assert_eq!(err.summary(), "{peer: 10.0.0.1}, cause: closed");
}
