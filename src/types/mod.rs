//! Taxonomy and value types.
//!
//! Definitions ([`Trait`], [`Namespace`], [`Class`], [`Modifiers`]) describe what
//! kinds of errors exist; values ([`Error`], [`Cause`], [`PropertyChain`]) are
//! what call sites create and pass around.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{ClassModifier, Namespace};
//!
//! let storage = Namespace::new("storage", &[]);
//! let wrapper = storage.class("wrapper", &[]).apply(&[ClassModifier::Transparent]);
//! let missing = storage.class("missing", &[]);
//!
//! let err = wrapper.wrap(missing.error("no such key"), "reading session");
//! assert_eq!(err.class(), &missing);
//! assert_eq!(err.to_string(), "reading session, cause: storage.missing: no such key");
//! ```

pub mod builder;
pub mod cause;
pub mod class;
pub mod error;
pub mod error_formatter;
pub mod modifiers;
pub mod namespace;
pub mod property;
#[cfg(feature = "serde")]
pub mod report;
pub mod trait_tag;

pub use builder::{ErrorBuilder, TraceMode};
pub use cause::{Cause, Underlying};
pub use class::Class;
pub use error::{Error, ErrorChain, StructuredChain};
pub use error_formatter::{ErrorFormatBuilder, ErrorFormatConfig};
pub use modifiers::{ClassModifier, ClassModifiers, InheritedModifiers, Modifiers};
pub use namespace::Namespace;
pub use property::{PropertyChain, PropertyResult, PropertyValue, Value};
#[cfg(feature = "serde")]
pub use report::{ErrorReport, PropertyEntry};
pub use trait_tag::Trait;

/// Result alias with [`Error`] as the failure type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
