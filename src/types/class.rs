//! Error classes: the unit of error classification.
//!
//! A [`Class`] belongs to a [`Namespace`] and optionally to a parent class.
//! Traits are flattened at definition time (own, parent's and namespace's), so
//! [`Class::has`] never walks the hierarchy; [`Class::is`] walks the parent
//! chain by id.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{ClassModifier, Namespace};
//!
//! let io = Namespace::new("io", &[]);
//! let failure = io.class("failure", &[]);
//! let quiet = failure.subclass("quiet", &[]).apply(&[ClassModifier::OmitStackTrace]);
//!
//! assert_eq!(quiet.name(), "io.failure.quiet");
//! assert!(quiet.is(&failure));
//! assert!(!failure.is(&quiet));
//! assert!(quiet.error("disk gone").stack_trace().is_none());
//! ```

use crate::common::DEFAULT_NAMESPACE;
use crate::id;
use crate::types::builder::ErrorBuilder;
use crate::types::cause::Cause;
use crate::types::error::Error;
use crate::types::modifiers::{ClassModifier, Modifiers};
use crate::types::namespace::Namespace;
use crate::types::trait_tag::Trait;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::hint::black_box;
use std::sync::Arc;

struct ClassData {
    namespace: Namespace,
    parent: Option<Class>,
    id: u64,
    name: String,
    traits: HashSet<Trait>,
    modifiers: RwLock<Modifiers>,
}

/// Shared handle to a class definition.
#[derive(Clone)]
pub struct Class(Arc<ClassData>);

impl Class {
    /// Defines a class with a bare name in the default namespace.
    pub fn new(name: impl Into<String>, traits: &[Trait]) -> Self {
        Self::create(&DEFAULT_NAMESPACE, None, name.into(), traits)
    }

    pub(crate) fn create(
        namespace: &Namespace,
        parent: Option<&Class>,
        name: String,
        traits: &[Trait],
    ) -> Self {
        let mut flattened = namespace.collect_traits();
        if let Some(parent) = parent {
            flattened.extend(parent.0.traits.iter().cloned());
        }
        flattened.extend(traits.iter().cloned());

        let modifiers = match parent {
            Some(parent) => Modifiers::inherited(&parent.modifiers()),
            None => Modifiers::inherited(&namespace.modifiers()),
        };

        let class = Self(Arc::new(ClassData {
            namespace: namespace.clone(),
            parent: parent.cloned(),
            id: id::next(),
            name,
            traits: flattened,
            modifiers: RwLock::new(modifiers),
        }));
        namespace.weak_registry().announce_class(&class);
        class
    }

    /// Defines a subclass named `<self>.<name>` in the same namespace.
    pub fn subclass(&self, name: impl AsRef<str>, traits: &[Trait]) -> Class {
        let full = format!("{}.{}", self.0.name, name.as_ref());
        Self::create(&self.0.namespace, Some(self), full, traits)
    }

    /// Sets the override layer of this class's modifiers.
    ///
    /// # Panics
    ///
    /// Panics when called a second time on the same class.
    #[track_caller]
    pub fn apply(self, modifiers: &[ClassModifier]) -> Self {
        {
            let mut current = self.0.modifiers.write();
            let next = current.replace_with(Modifiers::own(modifiers));
            *current = next;
        }
        self
    }

    /// Whether `other` is this class or one of its ancestors.
    pub fn is(&self, other: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.0.id == other.0.id {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Whether the class carries `t`, directly or by inheritance.
    #[inline]
    pub fn has(&self, t: &Trait) -> bool {
        self.0.traits.contains(t)
    }

    /// Creates an error of this class with a message.
    #[inline(never)]
    pub fn error(&self, message: impl Into<String>) -> Error {
        black_box(ErrorBuilder::new(self).message(message).create(1))
    }

    /// Creates an error of this class without a message.
    #[inline(never)]
    pub fn blank(&self) -> Error {
        black_box(ErrorBuilder::new(self).create(1))
    }

    /// Creates an error of this class caused by `cause`.
    #[inline(never)]
    pub fn wrap(&self, cause: impl Into<Cause>, message: impl Into<String>) -> Error {
        black_box(ErrorBuilder::new(self).message(message).cause(cause).create(1))
    }

    /// Creates an error of this class caused by `cause`, without a message.
    #[inline(never)]
    pub fn from_cause(&self, cause: impl Into<Cause>) -> Error {
        black_box(ErrorBuilder::new(self).cause(cause).create(1))
    }

    /// Root of this class's namespace hierarchy.
    pub fn root_namespace(&self) -> &Namespace {
        let mut namespace = &self.0.namespace;
        while let Some(parent) = namespace.parent() {
            namespace = parent;
        }
        namespace
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Qualified name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    pub fn namespace(&self) -> &Namespace {
        &self.0.namespace
    }

    #[inline]
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Flattened trait set.
    pub fn traits(&self) -> impl Iterator<Item = &Trait> {
        self.0.traits.iter()
    }

    /// Snapshot of the effective modifiers.
    pub fn modifiers(&self) -> Modifiers {
        self.0.modifiers.read().clone()
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("namespace", &self.0.namespace.name())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Class {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.name)
    }
}
