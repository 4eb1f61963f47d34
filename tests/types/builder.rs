use error_taxon::{ClassModifier, Error, ErrorBuilder, Namespace, TraceMode};
use std::error::Error as StdError;
use std::{fmt, io};

/// A third-party error type that keeps a structured error as its source.
#[derive(Debug)]
struct Adapter(Error);

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adapter: {}", self.0)
    }
}

impl StdError for Adapter {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn foreign_cause_keeps_the_class_mode() {
    let class = Namespace::new("builder_it", &[]).class("c", &[]);
    let builder = ErrorBuilder::new(&class).cause(io::Error::other("x"));
    assert_eq!(builder.mode(), TraceMode::Trimmed);
}

#[test]
fn foreign_wrapper_over_structured_cause_is_not_borrowed_from() {
    let ns = Namespace::new("builder_adapter", &[]);
    let inner = ns.class("inner", &[]).error("deep");
    let outer = ns.class("outer", &[]);

    let builder = ErrorBuilder::new(&outer).cause(Adapter(inner.clone()));
    assert_eq!(builder.mode(), TraceMode::Trimmed);

    let err = builder.build();
    let trace = err.stack_trace().unwrap();
    assert!(trace.is_trimmed());
    assert_ne!(trace.addresses(), inner.stack_trace().unwrap().addresses());

    let enhanced = ErrorBuilder::new(&outer).cause(Adapter(inner)).enhance_stack_trace();
    assert_eq!(enhanced.mode(), TraceMode::Collect);
}

#[test]
fn borrow_only_reuses_the_cause_trace() {
    let ns = Namespace::new("borrow_only", &[]);
    let loud = ns.class("loud", &[]);
    let quiet = ns.class("quiet", &[]).apply(&[ClassModifier::OmitStackTrace]);
    let cause = loud.error("root");

    let builder = ErrorBuilder::new(&quiet).cause(cause.clone());
    assert_eq!(builder.mode(), TraceMode::BorrowOnly);

    let err = builder.build();
    assert_eq!(
        err.stack_trace().map(|t| t.addresses().to_vec()),
        cause.stack_trace().map(|t| t.addresses().to_vec())
    );
}

#[test]
fn borrow_only_without_cause_trace_collects_untrimmed() {
    let quiet = Namespace::new("borrow_fallback", &[]).class("q", &[]).apply(&[ClassModifier::OmitStackTrace]);
    let cause = quiet.error("untraced");

    let err = ErrorBuilder::new(&quiet).cause(cause).build();
    let trace = err.stack_trace().unwrap();
    assert!(!trace.is_trimmed());
}

#[test]
fn explicit_request_overrides_omit() {
    let quiet = Namespace::new("explicit", &[]).class("q", &[]).apply(&[ClassModifier::OmitStackTrace]);
    let err = ErrorBuilder::new(&quiet).message("traced anyway").stack_trace().build();

    assert!(err.stack_trace().is_some_and(|trace| trace.is_trimmed()));
}

#[test]
fn enhance_over_foreign_cause_collects() {
    let class = Namespace::new("enhance_foreign", &[]).class("c", &[]);
    let builder = ErrorBuilder::new(&class).cause(io::Error::other("x")).enhance_stack_trace();

    assert_eq!(builder.mode(), TraceMode::Collect);
    let trace = builder.build().stack_trace().cloned().unwrap();
    assert!(trace.cause().is_none());
    assert!(!trace.is_trimmed());
}

#[test]
fn transparent_builder_error_takes_cause_class() {
    let ns = Namespace::new("builder_transparent", &[]);
    let inner = ns.class("inner", &[]);
    let outer = ns.class("outer", &[]);

    let err = ErrorBuilder::new(&outer).message("ctx").cause(inner.error("boom")).transparent().build();
    assert!(err.is_transparent());
    assert_eq!(err.class(), &inner);
}

#[test]
#[should_panic(expected = "wrong builder usage")]
fn transparent_without_cause_panics() {
    let class = Namespace::new("builder_panic", &[]).class("c", &[]);
    let _ = ErrorBuilder::new(&class).transparent();
}

#[test]
fn from_error_copies_message_cause_and_transparency() {
    let ns = Namespace::new("from_error", &[]);
    let source = error_taxon::decorate(ns.class("c", &[]).error("root"), "ctx");

    let rebuilt = ErrorBuilder::from_error(&source).build();
    assert_eq!(rebuilt.message(), "ctx");
    assert!(rebuilt.is_transparent());
    assert_eq!(rebuilt.summary(), source.summary());
}
