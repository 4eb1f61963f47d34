use error_taxon::common::{GENERIC, TEMPORARY};
use error_taxon::{decorate, inspect, ClassModifier, Error, ErrorBuilder, Namespace, Trait};
use std::error::Error as StdError;
use std::io;

#[test]
fn with_is_most_recent_wins_and_copy_on_write() {
    let class = Namespace::new("props", &[]).class("x", &[]);
    let first = class.error("x").with("k", 1);
    let second = first.with("k", 2);

    assert_eq!(second.property("k").bind::<i32>(), Some(2));
    assert!(second.property("k").ok());
    assert_eq!(first.property("k").bind::<i32>(), Some(1));
    assert!(!first.ptr_eq(&second));
}

#[test]
fn property_lookup_stops_at_opaque_errors() {
    let ns = Namespace::new("lookup", &[]);
    let inner = ns.class("inner", &[]).error("deep").with("depth", 2);
    let opaque = ns.class("outer", &[]).wrap(inner.clone(), "shallow");
    let transparent = decorate(inner, "decorated");

    assert!(!opaque.property("depth").ok());
    assert_eq!(transparent.property("depth").bind::<i32>(), Some(2));
}

#[test]
fn also_with_only_none_returns_the_same_value() {
    let err = GENERIC.error("primary");
    let same = err.also([None::<Error>, None]);

    assert!(same.ptr_eq(&err));
    assert!(same.underlying().is_empty());
}

#[test]
fn also_appends_in_order() {
    let e1 = GENERIC.error("first");
    let e2 = io::Error::other("second");
    let err = GENERIC.error("primary").also([Some(e1)]).join(e2);

    let messages: Vec<String> = err.underlying().iter().map(ToString::to_string).collect();
    assert_eq!(messages, ["generic: first", "second"]);
    assert!(err.summary().ends_with("(hidden: generic: first, second)"));
}

#[test]
fn transparent_wrapper_reports_the_cause_class() {
    let ns = Namespace::new("transp", &[]);
    let inner = ns.class("inner", &[]);
    let wrapper = ns.class("wrapper", &[]).apply(&[ClassModifier::Transparent]);

    let err = wrapper.wrap(inner.error("failed"), "while syncing");
    assert_eq!(err.class(), &inner);
    assert_eq!(err.own_class(), &wrapper);
    assert!(!err.summary().starts_with("transp.wrapper"));
    assert_eq!(err.to_string(), "while syncing, cause: transp.inner: failed");
}

#[derive(Debug)]
struct Adapter(Error);

impl std::fmt::Display for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("adapter failed")
    }
}

impl StdError for Adapter {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn structured_error_behind_a_foreign_wrapper_is_opaque() {
    let ns = Namespace::new("behind_adapter", &[]);
    let inner = ns.class("inner", &[]);
    let nested = inner.error("deep").with("shard", 7);

    let err = decorate(Adapter(nested), "ctx");
    assert!(!err.extends(&inner));
    assert_eq!(err.class().name(), "synthetic.foreign");
    assert!(!err.property("shard").ok());
    assert_eq!(err.chain().count(), 1);

    assert!(inspect::extends(err.cause().unwrap().as_error(), &inner));
}

#[test]
fn user_value_under_underlying_key_keeps_joined_errors() {
    let err = GENERIC
        .error("primary")
        .join(io::Error::other("first"))
        .with(error_taxon::UNDERLYING, 1);
    assert_eq!(err.underlying().len(), 1);

    let err = err.join(io::Error::other("second"));
    let messages: Vec<String> = err.underlying().iter().map(ToString::to_string).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn decorate_foreign_error_renders_without_prefix() {
    let err = decorate(io::Error::other("disk full"), "flush failed");
    assert_eq!(err.summary(), "flush failed, cause: disk full");
    assert!(err.source().is_some());
}

#[test]
fn classification_scenario() {
    let timeout = Trait::new("timeout");
    let net = Namespace::new("net", &[]).class("timeout", &[timeout.clone()]);
    let other = Namespace::new("other", &[]).class("class", &[]);
    let err = net.error("dial timed out");

    assert!(inspect::has(&err, &timeout));
    assert!(inspect::extends(&err, &net));
    assert!(!inspect::extends(&err, &other));
    assert!(!err.has(&TEMPORARY));
}

#[test]
fn opaque_errors_hide_their_cause_from_source() {
    let class = Namespace::new("hide", &[]).class("opaque", &[]);
    let err = class.wrap(io::Error::other("secret"), "visible");

    assert!(err.source().is_none());
    assert_eq!(err.cause().map(ToString::to_string).as_deref(), Some("secret"));
}

#[test]
fn belongs_matches_same_class() {
    let class = Namespace::new("belongs", &[]).class("c", &[]);
    let a = class.error("a");
    let b = class.error("b");
    let foreign = io::Error::other("x");

    assert!(a.belongs(&b));
    assert!(!a.belongs(&foreign));
}

#[test]
fn recover_joins_the_panic_as_underlying() {
    let boundary = GENERIC.error("handler crashed");
    let result: Result<(), Error> = boundary.recover(|| panic!("index out of range"));

    let err = result.unwrap_err();
    assert_eq!(err.underlying().len(), 1);
    assert!(err.underlying()[0].to_string().contains("index out of range"));
}

#[test]
fn recover_keeps_structured_panic_payloads() {
    let boundary = GENERIC.error("worker failed");
    let payload = Namespace::new("panics", &[]).class("abort", &[]).error("stop");
    let thrown = payload.clone();

    let err = boundary.recover(move || thrown.panic()).unwrap_err();
    assert!(err.underlying()[0].cast().is_some_and(|e| e.ptr_eq(&payload)));
}

#[test]
fn retraced_replaces_the_trace() {
    let class = Namespace::new("retrace", &[]).class("c", &[]).apply(&[ClassModifier::OmitStackTrace]);
    let err = class.error("no trace");
    assert!(err.stack_trace().is_none());

    let traced = err.retraced();
    assert!(traced.stack_trace().is_some_and(|trace| trace.is_trimmed()));
    assert_eq!(traced.message(), "no trace");
}

#[test]
fn enhanced_links_the_cause_trace() {
    let class = Namespace::new("enhance", &[]).class("c", &[]);
    let cause = class.error("root");
    let wrapped = ErrorBuilder::new(&class).message("outer").cause(cause.clone()).build().enhanced();

    let trace = wrapped.stack_trace().unwrap();
    assert_eq!(
        trace.cause().map(|c| c.addresses().to_vec()),
        cause.stack_trace().map(|c| c.addresses().to_vec())
    );
}

#[test]
fn annotations_are_read_through_the_chain() {
    let class = Namespace::new("annot", &[]).class("c", &[]);
    let inner = class.error("inner").annotate().hint("check the config").tag("env", "prod").done();
    let outer = decorate(inner, "outer").annotate().tag("env", "staging").tag("region", "eu").done();

    assert_eq!(outer.hint(), Some("check the config"));
    let tags = outer.tags();
    assert_eq!(tags["env"], "staging");
    assert_eq!(tags["region"], "eu");
}

#[test]
fn chain_yields_structured_errors_outermost_first() {
    let class = Namespace::new("chain", &[]).class("c", &[]);
    let err = decorate(class.wrap(class.error("a"), "b"), "c");

    let messages: Vec<&str> = err.chain().map(Error::message).collect();
    assert_eq!(messages, ["c", "b", "a"]);
}

#[test]
fn alternate_display_appends_the_trace() {
    let class = Namespace::new("alt", &[]).class("c", &[]);
    let err = class.error("boom");

    let plain = err.to_string();
    let rich = format!("{err:#}");
    assert!(rich.starts_with(&plain));
    assert!(rich.len() > plain.len());
}
