//! Capability tags attached to namespaces and classes.
//!
//! A [`Trait`] is an opaque marker such as "timeout" or "retryable" that can be
//! checked on an error independently of its class. Identity is by id: two traits
//! created with the same label are different traits.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{Namespace, Trait};
//!
//! let retryable = Trait::new("retryable");
//! let storage = Namespace::new("storage", &[retryable.clone()]);
//! let class = storage.class("busy", &[]);
//!
//! assert!(class.has(&retryable));
//! assert!(!class.has(&Trait::new("retryable")));
//! ```

use crate::id;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque, immutable capability tag.
#[derive(Clone)]
pub struct Trait {
    id: u64,
    label: Arc<str>,
}

impl Trait {
    /// Creates a new trait with a fresh identity.
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self { id: id::next(), label: label.into() }
    }

    /// Process-unique id of this trait.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Human readable label. Not used for identity.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Trait {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Trait {}

impl Hash for Trait {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trait({}#{})", self.label, self.id)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Trait {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}
