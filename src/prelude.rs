//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_taxon::prelude::*;
//!
//! let config = Namespace::new("config", &[]);
//! let missing = config.class("missing", &[common::NOT_FOUND.clone()]);
//!
//! fn load(class: &Class) -> Result<String> {
//!     std::fs::read_to_string("/definitely/missing/app.toml").wrap_err(class, "loading app.toml")
//! }
//!
//! let err = load(&missing).unwrap_err();
//! assert!(err.has(&common::NOT_FOUND));
//! ```

// Macros
pub use crate::{decorate, new_error, wrap_error};

// Core types
pub use crate::common;
pub use crate::types::{Class, ClassModifier, Error, ErrorBuilder, Namespace, Result, Trait};

// Traits
pub use crate::traits::{ResultExt, TransientError};
