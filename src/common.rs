//! Well-known traits, namespaces and classes.
//!
//! Everything here is defined lazily in the process-wide registry on first use.
//! The `common` classes are meant for opaque, general purpose failures; code
//! that needs to branch on an error should define its own classes and rely on
//! traits for cross-cutting checks.

use crate::types::class::Class;
use crate::types::modifiers::ClassModifier;
use crate::types::namespace::Namespace;
use crate::types::trait_tag::Trait;
use once_cell::sync::Lazy;

/// Failures that may go away when retried.
pub static TEMPORARY: Lazy<Trait> = Lazy::new(|| Trait::new("temporary"));
/// Failures caused by an elapsed deadline.
pub static TIMEOUT: Lazy<Trait> = Lazy::new(|| Trait::new("timeout"));
pub static NOT_FOUND: Lazy<Trait> = Lazy::new(|| Trait::new("not_found"));
pub static DUPLICATE: Lazy<Trait> = Lazy::new(|| Trait::new("duplicate"));

/// Namespace of classes defined with [`Class::new`].
pub static DEFAULT_NAMESPACE: Lazy<Namespace> = Lazy::new(|| Namespace::new("default", &[]));

/// Class used by the free [`new`](crate::new) and [`blank`](crate::blank) constructors.
pub static GENERIC: Lazy<Class> = Lazy::new(|| Class::new("generic", &[]));

/// General purpose classes.
pub static COMMON: Lazy<Namespace> = Lazy::new(|| Namespace::new("common", &[]));

pub static ILLEGAL_ARGUMENT: Lazy<Class> = Lazy::new(|| COMMON.class("illegal_argument", &[]));
pub static ILLEGAL_STATE: Lazy<Class> = Lazy::new(|| COMMON.class("illegal_state", &[]));
pub static ILLEGAL_FORMAT: Lazy<Class> = Lazy::new(|| COMMON.class("illegal_format", &[]));
pub static INITIALIZATION_FAILED: Lazy<Class> =
    Lazy::new(|| COMMON.class("initialization_failed", &[]));
pub static DATA_UNAVAILABLE: Lazy<Class> = Lazy::new(|| COMMON.class("data_unavailable", &[]));
pub static UNSUPPORTED_OPERATION: Lazy<Class> =
    Lazy::new(|| COMMON.class("unsupported_operation", &[]));
pub static REJECTED_OPERATION: Lazy<Class> = Lazy::new(|| COMMON.class("rejected_operation", &[]));
pub static INTERRUPTED: Lazy<Class> = Lazy::new(|| COMMON.class("interrupted", &[]));
/// Raised by [`ensure`](crate::ensure).
pub static ASSERTION_FAILED: Lazy<Class> = Lazy::new(|| COMMON.class("assertion_failed", &[]));
pub static INTERNAL_ERROR: Lazy<Class> = Lazy::new(|| COMMON.class("internal_error", &[]));
pub static EXTERNAL_ERROR: Lazy<Class> = Lazy::new(|| COMMON.class("external_error", &[]));
pub static CONCURRENT_UPDATE: Lazy<Class> = Lazy::new(|| COMMON.class("concurrent_update", &[]));
/// Carries the [`TIMEOUT`] trait.
pub static TIMEOUT_ELAPSED: Lazy<Class> =
    Lazy::new(|| COMMON.class("timeout", &[TIMEOUT.clone()]));
pub static NOT_IMPLEMENTED: Lazy<Class> =
    Lazy::new(|| UNSUPPORTED_OPERATION.subclass("not_implemented", &[]));
pub static UNSUPPORTED_VERSION: Lazy<Class> =
    Lazy::new(|| UNSUPPORTED_OPERATION.subclass("version", &[]));

/// Classes that user code cannot check against directly.
pub(crate) static SYNTHETIC: Lazy<Namespace> = Lazy::new(|| Namespace::new("synthetic", &[]));

/// Reported by [`Error::class`](crate::Error::class) when no opaque structured
/// error exists in the chain.
pub(crate) static FOREIGN: Lazy<Class> = Lazy::new(|| SYNTHETIC.class("foreign", &[]));

/// Adds a message to a cause without classifying it.
pub(crate) static TRANSPARENT_WRAPPER: Lazy<Class> =
    Lazy::new(|| SYNTHETIC.class("decorate", &[]).apply(&[ClassModifier::Transparent]));

/// Adds a stack trace to a cause without classifying it.
pub(crate) static STACK_TRACE_WRAPPER: Lazy<Class> =
    Lazy::new(|| SYNTHETIC.class("stacktrace", &[]).apply(&[ClassModifier::Transparent]));
