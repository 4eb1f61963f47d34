use error_taxon::{ClassModifier, Namespace, Trait};

#[test]
fn contains_covers_descendant_namespaces() {
    let root = Namespace::new("store", &[]);
    let blob = root.namespace("blob", &[]);
    let other = Namespace::new("store", &[]);
    let class = blob.class("missing", &[]);

    assert!(blob.contains(&class));
    assert!(root.contains(&class));
    assert!(!other.contains(&class));
}

#[test]
fn collect_traits_gathers_ancestors() {
    let a = Trait::new("a");
    let b = Trait::new("b");
    let root = Namespace::new("traits_root", &[a.clone()]);
    let child = root.namespace("child", &[b.clone()]);

    let traits = child.collect_traits();
    assert!(traits.contains(&a));
    assert!(traits.contains(&b));
    assert_eq!(child.traits(), &[b]);
}

#[test]
fn every_class_under_a_namespace_has_its_traits() {
    let audited = Trait::new("audited");
    let ns = Namespace::new("audit", &[audited.clone()]);
    let nested = ns.namespace("inner", &[]);

    for class in [ns.class("a", &[]), nested.class("b", &[]), nested.class("c", &[]).subclass("d", &[])] {
        assert!(class.has(&audited), "{class} misses the namespace trait");
    }
}

#[test]
fn child_namespaces_inherit_modifiers() {
    let root = Namespace::new("silent", &[]).apply(&[ClassModifier::OmitStackTrace]);
    let child = root.namespace("child", &[]);

    assert!(!child.modifiers().collect_stack_trace());
    assert!(child.class("c", &[]).error("x").stack_trace().is_none());
}

#[test]
fn namespaces_remember_their_registry() {
    let ns = Namespace::new("registered", &[]);
    let registry = ns.registry().unwrap();
    assert!(registry.namespaces().contains(&ns));
}
