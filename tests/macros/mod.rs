use error_taxon::common::ILLEGAL_FORMAT;
use error_taxon::{decorate, new_error, wrap_error, Namespace};
use std::io;

#[test]
fn new_error_formats_the_message() {
    let err = new_error!(ILLEGAL_FORMAT, "bad byte {:#04x} at {}", 0xff, 7);

    assert_eq!(err.message(), "bad byte 0xff at 7");
    assert!(err.extends(&ILLEGAL_FORMAT));
    assert!(err.stack_trace().is_some());
}

#[test]
fn wrap_error_sets_class_and_cause() {
    let class = Namespace::new("macro_it", &[]).class("load", &[]);
    let err = wrap_error!(class, io::Error::other("denied"), "opening {}", "data.db");

    assert_eq!(err.summary(), "macro_it.load: opening data.db, cause: denied");
    assert!(err.cause().is_some());
}

#[test]
fn decorate_macro_is_transparent() {
    let class = Namespace::new("macro_decorate", &[]).class("inner", &[]);
    let err = decorate!(class.error("root"), "step {}", 2);

    assert!(err.is_transparent());
    assert_eq!(err.class(), &class);
    assert_eq!(err.summary(), "step 2, cause: macro_decorate.inner: root");
}

#[test]
fn captured_names_work_in_format_strings() {
    let attempts = 3;
    let err = new_error!(ILLEGAL_FORMAT, "gave up after {attempts} attempts");
    assert_eq!(err.message(), "gave up after 3 attempts");
}
