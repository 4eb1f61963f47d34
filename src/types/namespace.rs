//! Hierarchical groups of error classes.
//!
//! A [`Namespace`] carries traits and modifiers that every class defined under
//! it (or under a child namespace) inherits.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{Namespace, Trait};
//!
//! let transient = Trait::new("transient");
//! let net = Namespace::new("net", &[transient.clone()]);
//! let dns = net.namespace("dns", &[]);
//! let lookup = dns.class("lookup", &[]);
//!
//! assert_eq!(dns.name(), "net.dns");
//! assert_eq!(lookup.name(), "net.dns.lookup");
//! assert!(lookup.has(&transient));
//! assert!(net.contains(&lookup));
//! ```

use crate::id;
use crate::registry::{Registry, WeakRegistry};
use crate::types::class::Class;
use crate::types::modifiers::{ClassModifier, Modifiers};
use crate::types::trait_tag::Trait;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

struct NamespaceData {
    registry: WeakRegistry,
    parent: Option<Namespace>,
    id: u64,
    name: String,
    traits: Vec<Trait>,
    modifiers: RwLock<Modifiers>,
}

/// Shared handle to a namespace definition.
#[derive(Clone)]
pub struct Namespace(Arc<NamespaceData>);

impl Namespace {
    /// Defines a root namespace in the process-wide registry.
    pub fn new(name: impl Into<String>, traits: &[Trait]) -> Self {
        Registry::global().namespace(name, traits)
    }

    pub(crate) fn create(
        registry: WeakRegistry,
        parent: Option<Namespace>,
        name: String,
        traits: &[Trait],
    ) -> Self {
        let modifiers = match &parent {
            Some(parent) => Modifiers::inherited(&parent.modifiers()),
            None => Modifiers::None,
        };
        let namespace = Self(Arc::new(NamespaceData {
            registry,
            parent,
            id: id::next(),
            name,
            traits: traits.to_vec(),
            modifiers: RwLock::new(modifiers),
        }));
        namespace.0.registry.announce_namespace(&namespace);
        namespace
    }

    /// Defines a child namespace named `<self>.<name>`.
    pub fn namespace(&self, name: impl AsRef<str>, traits: &[Trait]) -> Namespace {
        let full = format!("{}.{}", self.0.name, name.as_ref());
        Self::create(self.0.registry.clone(), Some(self.clone()), full, traits)
    }

    /// Defines a class named `<self>.<name>` in this namespace.
    pub fn class(&self, name: impl AsRef<str>, traits: &[Trait]) -> Class {
        let full = format!("{}.{}", self.0.name, name.as_ref());
        Class::create(self, None, full, traits)
    }

    /// Sets this namespace's own modifiers. Classes and namespaces defined
    /// afterwards inherit them.
    ///
    /// # Panics
    ///
    /// Panics when called a second time on the same namespace.
    #[track_caller]
    pub fn apply(self, modifiers: &[ClassModifier]) -> Self {
        {
            let mut current = self.0.modifiers.write();
            let next = current.replace_with(Modifiers::own(modifiers));
            *current = next;
        }
        self
    }

    /// Whether `class` was defined in this namespace or one of its descendants.
    pub fn contains(&self, class: &Class) -> bool {
        let mut current = Some(class.namespace());
        while let Some(namespace) = current {
            if namespace.0.id == self.0.id {
                return true;
            }
            current = namespace.parent();
        }
        false
    }

    /// Traits declared on this namespace and all its ancestors.
    pub fn collect_traits(&self) -> HashSet<Trait> {
        let mut result = HashSet::new();
        let mut current = Some(self);
        while let Some(namespace) = current {
            result.extend(namespace.0.traits.iter().cloned());
            current = namespace.parent();
        }
        result
    }

    /// Traits declared on this namespace only.
    pub fn traits(&self) -> &[Trait] {
        &self.0.traits
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Dot-joined name, parents first.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    pub fn parent(&self) -> Option<&Namespace> {
        self.0.parent.as_ref()
    }

    /// Snapshot of the effective modifiers.
    pub fn modifiers(&self) -> Modifiers {
        self.0.modifiers.read().clone()
    }

    /// The registry this namespace was defined in, while it is alive.
    pub fn registry(&self) -> Option<Registry> {
        self.0.registry.upgrade()
    }

    pub(crate) fn weak_registry(&self) -> &WeakRegistry {
        &self.0.registry
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Namespace {}

impl Hash for Namespace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("traits", &self.0.traits)
            .finish()
    }
}
