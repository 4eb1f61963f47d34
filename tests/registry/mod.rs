use error_taxon::{subscribe, Class, Namespace, Registry, RegistryListener};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Namespace(String),
    Class(String),
}

#[derive(Default)]
struct Recorder(Mutex<Vec<Event>>);

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

impl RegistryListener for Recorder {
    fn on_namespace_created(&self, namespace: &Namespace) {
        self.0.lock().unwrap().push(Event::Namespace(namespace.name().to_owned()));
    }

    fn on_class_created(&self, class: &Class) {
        self.0.lock().unwrap().push(Event::Class(class.name().to_owned()));
    }
}

#[test]
fn late_subscriber_is_replayed_before_new_definitions() {
    let registry = Registry::new();
    let n1 = registry.namespace("n1", &[]);
    let c1 = n1.class("c1", &[]);

    let recorder = Arc::new(Recorder::default());
    registry.subscribe(recorder.clone());
    assert_eq!(
        recorder.events(),
        [Event::Namespace(n1.name().to_owned()), Event::Class(c1.name().to_owned())]
    );

    n1.class("c2", &[]);
    assert_eq!(recorder.events().last(), Some(&Event::Class("n1.c2".to_owned())));
    assert_eq!(recorder.events().len(), 3);
}

#[test]
fn replay_lists_namespaces_before_classes() {
    let registry = Registry::new();
    let a = registry.namespace("a", &[]);
    a.class("x", &[]);
    a.namespace("b", &[]);

    let recorder = Arc::new(Recorder::default());
    registry.subscribe(recorder.clone());
    assert_eq!(
        recorder.events(),
        [
            Event::Namespace("a".to_owned()),
            Event::Namespace("a.b".to_owned()),
            Event::Class("a.x".to_owned()),
        ]
    );
}

#[test]
fn independent_registries_do_not_share_definitions() {
    let first = Registry::new();
    let second = Registry::new();
    let recorder = Arc::new(Recorder::default());
    second.subscribe(recorder.clone());

    first.namespace("only_first", &[]).class("c", &[]);
    assert!(recorder.events().is_empty());
    assert_eq!(first.classes().len(), 1);
    assert!(second.namespaces().is_empty());
}

#[test]
fn dropped_registry_stops_announcing() {
    let registry = Registry::new();
    let ns = registry.namespace("orphan", &[]);
    drop(registry);

    assert!(ns.registry().is_none());
    let class = ns.class("still_works", &[]);
    assert_eq!(class.error("x").summary(), "orphan.still_works: x");
}

#[test]
fn global_subscription_sees_existing_definitions() {
    let ns = Namespace::new("global_replay", &[]);
    let class = ns.class("c", &[]);

    let recorder = Arc::new(Recorder::default());
    subscribe(recorder.clone());

    let events = recorder.events();
    assert!(events.contains(&Event::Namespace(ns.name().to_owned())));
    assert!(events.contains(&Event::Class(class.name().to_owned())));
}
