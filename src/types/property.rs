//! Persistent key-value metadata attached to errors.
//!
//! [`PropertyChain`] is a singly linked list whose nodes are shared between
//! every chain built on top of them. [`PropertyChain::set`] allocates one new
//! head and leaves the receiver untouched, so an error can be extended without
//! affecting the value it was derived from.
//!
//! # Examples
//!
//! ```
//! use error_taxon::PropertyChain;
//!
//! let base = PropertyChain::new().set("attempt", 1);
//! let next = base.set("attempt", 2);
//!
//! assert_eq!(base.get("attempt").map(|v| v.to_string()), Some("1".to_string()));
//! assert_eq!(next.get("attempt").map(|v| v.to_string()), Some("2".to_string()));
//! assert_eq!(next.unique().len(), 1);
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Status code attached to an error.
pub const STATUS_CODE: &str = "code";
/// Free-form context attached to an error.
pub const CONTEXT: &str = "context";
/// Payload attached to an error.
pub const PAYLOAD: &str = "payload";
/// Holds the errors joined with [`Error::also`](crate::Error::also).
pub const UNDERLYING: &str = "underlying";

/// Anything that can be stored as a property value.
///
/// Implemented for every `'static` type that is `Display + Debug + Send + Sync`.
pub trait PropertyValue: Any + Display + Debug + Send + Sync {
    /// Upcast used for typed access.
    fn as_any(&self) -> &dyn Any;
}

impl<T> PropertyValue for T
where
    T: Any + Display + Debug + Send + Sync,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared, type-erased property value.
pub type Value = Arc<dyn PropertyValue>;

struct Node {
    key: Cow<'static, str>,
    value: Value,
    next: PropertyChain,
}

/// Immutable association list with copy-on-extend semantics.
#[derive(Clone, Default)]
pub struct PropertyChain {
    head: Option<Arc<Node>>,
}

impl PropertyChain {
    /// Empty chain.
    #[inline]
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Returns a new chain with `key` bound to `value` in front of this one.
    pub fn set<V>(&self, key: impl Into<Cow<'static, str>>, value: V) -> Self
    where
        V: PropertyValue,
    {
        self.set_value(key, Arc::new(value))
    }

    /// Same as [`set`](Self::set) for an already shared value.
    pub fn set_value(&self, key: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self { head: Some(Arc::new(Node { key: key.into(), value, next: self.clone() })) }
    }

    /// Most recently set value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Every entry from newest to oldest, shadowed entries included.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head.as_deref() }
    }

    /// Entries with shadowed keys removed, newest first.
    pub fn unique(&self) -> Vec<(&str, &Value)> {
        let mut seen = HashSet::new();
        self.iter().filter(|(key, _)| seen.insert(*key)).collect()
    }

    /// Whether both chains share the same head node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Debug for PropertyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over the raw nodes of a [`PropertyChain`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.head.as_deref();
        Some((node.key.as_ref(), &node.value))
    }
}

/// Outcome of a property lookup.
///
/// A missing key is an ordinary result, never an error.
#[derive(Clone, Default)]
pub struct PropertyResult {
    value: Option<Value>,
}

impl PropertyResult {
    pub(crate) fn found(value: Value) -> Self {
        Self { value: Some(value) }
    }

    /// Result for a key that was not found.
    #[inline]
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Whether the key was found.
    #[inline]
    pub fn ok(&self) -> bool {
        self.value.is_some()
    }

    /// The type-erased value, if found.
    #[inline]
    pub fn get(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consumes the result, returning the value if found.
    #[inline]
    pub fn value(self) -> Option<Value> {
        self.value
    }

    /// Typed view of the value; `None` when missing or of another type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let value: &dyn PropertyValue = self.value.as_deref()?;
        PropertyValue::as_any(value).downcast_ref::<T>()
    }

    /// Attempts to decode the value into `T`.
    pub fn bind<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl Debug for PropertyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Found").field(value).finish(),
            None => f.write_str("NotFound"),
        }
    }
}
