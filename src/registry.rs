//! Append-only registry of every namespace and class.
//!
//! Each definition is announced to the subscribed [`RegistryListener`]s exactly
//! once, in creation order. A listener subscribing late is first replayed the
//! whole history (namespaces, then classes) so it never misses an object.
//!
//! The process-wide registry behind [`Namespace::new`](crate::Namespace::new) is
//! created on first use and lives for the rest of the process. Independent
//! registries come from [`Registry::new`]; objects defined in them keep a weak
//! handle, so dropping the last [`Registry`] handle stops further announcements.
//!
//! Listeners run while the registry lock is held. A listener must not define
//! namespaces or classes in the registry that is calling it.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{Class, Namespace, Registry, RegistryListener};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Default)]
//! struct Names(Mutex<Vec<String>>);
//!
//! impl RegistryListener for Names {
//!     fn on_namespace_created(&self, namespace: &Namespace) {
//!         self.0.lock().unwrap().push(namespace.name().to_string());
//!     }
//!     fn on_class_created(&self, class: &Class) {
//!         self.0.lock().unwrap().push(class.name().to_string());
//!     }
//! }
//!
//! let registry = Registry::new();
//! let storage = registry.namespace("storage", &[]);
//! let names = Arc::new(Names::default());
//! registry.subscribe(names.clone());
//! storage.class("full", &[]);
//!
//! assert_eq!(*names.0.lock().unwrap(), ["storage", "storage.full"]);
//! ```

use crate::types::class::Class;
use crate::types::namespace::Namespace;
use crate::types::trait_tag::Trait;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

/// Receives every namespace and class definition of a registry.
pub trait RegistryListener: Send + Sync {
    /// Called exactly once for each namespace.
    fn on_namespace_created(&self, namespace: &Namespace);

    /// Called exactly once for each class.
    fn on_class_created(&self, class: &Class);
}

#[derive(Default)]
struct RegistryState {
    namespaces: Vec<Namespace>,
    classes: Vec<Class>,
    listeners: Vec<Arc<dyn RegistryListener>>,
}

/// Handle to a registry of namespaces and classes.
#[derive(Clone, Default)]
pub struct Registry {
    state: Arc<Mutex<RegistryState>>,
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

impl Registry {
    /// Creates an empty, independent registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Defines a root namespace in this registry.
    pub fn namespace(&self, name: impl Into<String>, traits: &[Trait]) -> Namespace {
        Namespace::create(self.downgrade(), None, name.into(), traits)
    }

    /// Replays the history to `listener`, then announces every later definition.
    pub fn subscribe(&self, listener: Arc<dyn RegistryListener>) {
        let mut state = self.state.lock();
        for namespace in &state.namespaces {
            listener.on_namespace_created(namespace);
        }
        for class in &state.classes {
            listener.on_class_created(class);
        }
        state.listeners.push(listener);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            listeners = state.listeners.len(),
            replayed = state.namespaces.len() + state.classes.len(),
            "registry listener subscribed"
        );
    }

    /// Snapshot of the namespaces defined so far, in creation order.
    pub fn namespaces(&self) -> Vec<Namespace> {
        self.state.lock().namespaces.clone()
    }

    /// Snapshot of the classes defined so far, in creation order.
    pub fn classes(&self) -> Vec<Class> {
        self.state.lock().classes.clone()
    }

    pub(crate) fn downgrade(&self) -> WeakRegistry {
        WeakRegistry(Arc::downgrade(&self.state))
    }

    fn register_namespace(&self, namespace: &Namespace) {
        let mut state = self.state.lock();
        state.namespaces.push(namespace.clone());
        for listener in &state.listeners {
            listener.on_namespace_created(namespace);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(namespace = %namespace, id = namespace.id(), "namespace registered");
    }

    fn register_class(&self, class: &Class) {
        let mut state = self.state.lock();
        state.classes.push(class.clone());
        for listener in &state.listeners {
            listener.on_class_created(class);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(class = %class, id = class.id(), "class registered");
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Registry")
            .field("namespaces", &state.namespaces.len())
            .field("classes", &state.classes.len())
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

/// Non-owning registry handle kept by namespaces.
#[derive(Clone)]
pub(crate) struct WeakRegistry(Weak<Mutex<RegistryState>>);

impl WeakRegistry {
    pub(crate) fn upgrade(&self) -> Option<Registry> {
        self.0.upgrade().map(|state| Registry { state })
    }

    pub(crate) fn announce_namespace(&self, namespace: &Namespace) {
        if let Some(registry) = self.upgrade() {
            registry.register_namespace(namespace);
        }
    }

    pub(crate) fn announce_class(&self, class: &Class) {
        if let Some(registry) = self.upgrade() {
            registry.register_class(class);
        }
    }
}

/// Subscribes `listener` to the process-wide registry.
pub fn subscribe(listener: Arc<dyn RegistryListener>) {
    Registry::global().subscribe(listener);
}
