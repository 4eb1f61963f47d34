//! Structured, classified errors with causal stack traces.
//!
//! Errors are values of a [`Class`], defined once in a [`Namespace`]. Classes
//! carry [`Trait`]s for cross-cutting checks ("is this retryable?") and
//! [`ClassModifier`]s that control stack trace capture and transparency. Each
//! [`Error`] records its cause, an immutable property chain and, depending on
//! its class, a stack trace that is rendered with the frames it shares with its
//! cause's trace elided.
//!
//! # Examples
//!
//! ## Defining and classifying errors
//!
//! ```
//! use error_taxon::{Namespace, Trait};
//!
//! let timeout = Trait::new("timeout");
//! let net = Namespace::new("net", &[]);
//! let dial = net.class("dial", &[timeout.clone()]);
//!
//! let err = dial.error("dial timed out").with("host", "10.0.0.7");
//!
//! assert!(err.has(&timeout));
//! assert!(err.extends(&dial));
//! assert_eq!(err.to_string(), "net.dial: dial timed out {host: 10.0.0.7}");
//! ```
//!
//! ## Wrapping foreign errors
//!
//! ```
//! use error_taxon::{decorate, inspect};
//! use std::io;
//!
//! let err = decorate(io::Error::other("disk full"), "flush failed");
//!
//! assert_eq!(err.summary(), "flush failed, cause: disk full");
//! assert!(inspect::cast(&err).is_some());
//! ```
//!
//! ## Rich rendering
//!
//! `{:#}` appends the causal stack trace to the summary:
//!
//! ```
//! use error_taxon::Namespace;
//!
//! let class = Namespace::new("app", &[]).class("boot", &[]);
//! let err = class.error("config missing");
//!
//! let rich = format!("{err:#}");
//! assert!(rich.starts_with("app.boot: config missing\n at "));
//! ```

/// Well-known traits, namespaces and classes
pub mod common;
/// Free construction functions
pub mod construct;
/// Inspection of arbitrary error values
pub mod inspect;
/// Construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Registry of namespaces and classes, with listeners
pub mod registry;
/// Stack trace capture and rendering
pub mod stacktrace;
/// Extension traits for `Result` and retry classification
pub mod traits;
/// Taxonomy and value types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

mod id;

pub use construct::{blank, decorate, enhance, ensure, ensure_trace, new};
pub use inspect::{cast, extends, has, inspect, property};
pub use registry::{subscribe, Registry, RegistryListener};
pub use stacktrace::{initialize_trace_transformer, PathTransformer, StackTrace};
pub use traits::{ResultExt, TransientError, TransientErrorExt};
pub use types::property::{CONTEXT, PAYLOAD, STATUS_CODE, UNDERLYING};
pub use types::{
    Cause, Class, ClassModifier, ClassModifiers, Error, ErrorBuilder, ErrorChain,
    ErrorFormatBuilder, ErrorFormatConfig, Modifiers, Namespace, PropertyChain, PropertyResult,
    PropertyValue, Result, TraceMode, Trait,
};
#[cfg(feature = "serde")]
pub use types::ErrorReport;
