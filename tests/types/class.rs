use error_taxon::common::{GENERIC, ILLEGAL_STATE, TIMEOUT_ELAPSED, UNSUPPORTED_OPERATION};
use error_taxon::common::{NOT_IMPLEMENTED, TIMEOUT};
use error_taxon::{Class, ClassModifier, Namespace, Trait};
use std::collections::HashSet;

#[test]
fn is_is_reflexive_and_follows_parents_only() {
    let api = Namespace::new("api", &[]);
    let request = api.class("request", &[]);
    let malformed = request.subclass("malformed", &[]);

    assert!(request.is(&request));
    assert!(malformed.is(&request));
    assert!(!request.is(&malformed));
    assert!(!malformed.is(&api.class("request", &[])));
}

#[test]
fn identity_is_by_definition_not_by_name() {
    let first = Class::new("twin", &[]);
    let second = Class::new("twin", &[]);

    assert_eq!(first.name(), second.name());
    assert_ne!(first, second);
    assert_eq!(first, first.clone());

    let set: HashSet<Class> = [first.clone(), second, first].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn subclasses_inherit_parent_traits() {
    let retryable = Trait::new("retryable");
    let fatal = Trait::new("fatal");
    let db = Namespace::new("db", &[]);
    let conn = db.class("conn", &[retryable.clone()]);
    let refused = conn.subclass("refused", &[fatal.clone()]);

    assert!(refused.has(&retryable));
    assert!(refused.has(&fatal));
    assert!(!conn.has(&fatal));
    assert_eq!(refused.traits().count(), 2);
}

#[test]
fn default_namespace_classes_keep_bare_names() {
    assert_eq!(GENERIC.name(), "generic");
    assert_eq!(Class::new("standalone", &[]).name(), "standalone");
    assert_eq!(ILLEGAL_STATE.name(), "common.illegal_state");
}

#[test]
fn well_known_classes_carry_their_relations() {
    assert!(TIMEOUT_ELAPSED.has(&TIMEOUT));
    assert!(NOT_IMPLEMENTED.is(&UNSUPPORTED_OPERATION));
}

#[test]
fn omit_stack_trace_is_inherited_by_subclasses() {
    let quiet = Namespace::new("quiet", &[]).class("base", &[]).apply(&[ClassModifier::OmitStackTrace]);
    let child = quiet.subclass("child", &[]);

    assert!(quiet.error("a").stack_trace().is_none());
    assert!(child.error("b").stack_trace().is_none());
}

#[test]
#[should_panic(expected = "more than once")]
fn modifiers_are_applied_once() {
    let class = Namespace::new("twice", &[]).class("c", &[]).apply(&[ClassModifier::Transparent]);
    let _ = class.apply(&[ClassModifier::OmitStackTrace]);
}

#[test]
fn display_is_the_qualified_name() {
    let class = Namespace::new("disp", &[]).class("thing", &[]);
    assert_eq!(class.to_string(), "disp.thing");
}
