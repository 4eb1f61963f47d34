//! Pluggable rewriting of file paths in rendered traces.
//!
//! The process-wide transformer is meant to be set once during start-up, e.g.
//! to strip a build directory prefix. Setting it again still installs the new
//! transformer but reports the re-initialisation through [`Reinitialized`].
//!
//! # Examples
//!
//! ```
//! use error_taxon::stacktrace::{PathTransformer, TraceTransformer};
//!
//! let slot = TraceTransformer::new();
//! assert!(slot.initialize(PathTransformer::new(|p| p.replace("/build/", ""))).is_ok());
//! assert_eq!(slot.current().apply("/build/src/main.rs"), "src/main.rs");
//!
//! let again = slot.initialize(PathTransformer::identity()).unwrap_err();
//! assert_eq!(again.previous.apply("/build/x.rs"), "x.rs");
//! ```

use crate::common::INITIALIZATION_FAILED;
use crate::types::error::Error;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Function applied to each frame's file path before it is rendered.
pub struct PathTransformer {
    transform: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl PathTransformer {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self { transform: Box::new(transform) }
    }

    /// Leaves paths unchanged.
    pub fn identity() -> Self {
        Self::new(str::to_owned)
    }

    #[inline]
    pub fn apply(&self, path: &str) -> String {
        (self.transform)(path)
    }
}

impl fmt::Debug for PathTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PathTransformer")
    }
}

/// Returned when a transformer slot is initialised a second time.
///
/// The new transformer is installed anyway; `previous` is the one it replaced.
#[derive(Debug)]
pub struct Reinitialized {
    pub previous: Arc<PathTransformer>,
    pub error: Error,
}

impl fmt::Display for Reinitialized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for Reinitialized {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// A set-once slot holding the active [`PathTransformer`].
///
/// Reads are lock-free; initialisation is serialised by a mutex.
pub struct TraceTransformer {
    current: ArcSwap<PathTransformer>,
    initialized: Mutex<bool>,
}

static GLOBAL: Lazy<TraceTransformer> = Lazy::new(TraceTransformer::new);

impl TraceTransformer {
    /// A fresh slot holding the identity transformer.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(PathTransformer::identity()),
            initialized: Mutex::new(false),
        }
    }

    /// The slot used when rendering traces without an explicit transformer.
    pub fn global() -> &'static TraceTransformer {
        &GLOBAL
    }

    /// The active transformer.
    #[inline]
    pub fn current(&self) -> Arc<PathTransformer> {
        self.current.load_full()
    }

    /// Installs `transformer`.
    pub fn initialize(&self, transformer: PathTransformer) -> Result<(), Reinitialized> {
        let mut initialized = self.initialized.lock();
        let previous = self.current.swap(Arc::new(transformer));

        if *initialized {
            #[cfg(feature = "tracing")]
            tracing::warn!("stack trace transformer initialized more than once");

            return Err(Reinitialized {
                previous,
                error: INITIALIZATION_FAILED.error("stack trace transformer was already set up"),
            });
        }

        *initialized = true;
        Ok(())
    }
}

impl Default for TraceTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TraceTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceTransformer").field("initialized", &*self.initialized.lock()).finish()
    }
}

/// Installs the process-wide path transformer.
pub fn initialize_trace_transformer(transformer: PathTransformer) -> Result<(), Reinitialized> {
    TraceTransformer::global().initialize(transformer)
}
