//! Step-by-step construction of an [`Error`].
//!
//! The builder decides how the new error obtains its stack trace. The decision
//! is kept in a [`TraceMode`] that changes as the builder is configured:
//!
//! | configuration                      | class collects traces | class omits traces |
//! |------------------------------------|-----------------------|--------------------|
//! | initial                            | `Trimmed`             | `Omit`             |
//! | `.cause(structured)`               | `BorrowOrCollect`     | `BorrowOnly`       |
//! | `.stack_trace()`                   | `Trimmed`             | `Trimmed`          |
//! | `.enhance_stack_trace()`, structured cause | `Enhance`     | `Enhance`          |
//! | `.enhance_stack_trace()`, foreign cause    | `Collect`     | `Collect`          |
//!
//! `.transparent()` only flips the transparency flag.
//!
//! Only a cause that is itself an [`Error`] counts as structured here; a
//! foreign error wrapping one is treated like any other foreign cause.
//!
//! Captures drop a fixed number of construction frames, so every public entry
//! point is `#[inline(never)]` and returns through `black_box`, which keeps its
//! frame from being replaced by a tail call in optimized builds.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{ErrorBuilder, Namespace, TraceMode};
//!
//! let class = Namespace::new("billing", &[]).class("declined", &[]);
//! let cause = class.error("card expired");
//!
//! let builder = ErrorBuilder::new(&class).message("payment failed").cause(cause.clone());
//! assert_eq!(builder.mode(), TraceMode::BorrowOrCollect);
//!
//! let err = builder.build();
//! assert!(err.stack_trace().unwrap().addresses() == cause.stack_trace().unwrap().addresses());
//! ```

use crate::types::cause::Cause;
use crate::types::class::Class;
use crate::types::error::{Error, Inner};
use crate::types::property::PropertyChain;
use crate::stacktrace::StackTrace;
use std::hint::black_box;
use std::sync::Arc;

/// How a new error obtains its stack trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceMode {
    /// Capture a fresh, full trace.
    Collect,
    /// Reuse the structured cause's trace, or capture a fresh trimmed one.
    BorrowOrCollect,
    /// Reuse the structured cause's trace, or capture a fresh one.
    BorrowOnly,
    /// Capture a fresh trace and link the cause's trace below it.
    Enhance,
    /// No trace.
    Omit,
    /// Capture a fresh trace rendered with file base names.
    Trimmed,
}

impl TraceMode {
    fn initial(class: &Class) -> Self {
        if class.modifiers().collect_stack_trace() {
            Self::Trimmed
        } else {
            Self::Omit
        }
    }
}

const WRAP_WITHOUT_CAUSE: &str = "wrong builder usage: wrap modifier without non-nil cause";

/// Configures and creates an [`Error`].
#[derive(Clone, Debug)]
#[must_use]
pub struct ErrorBuilder {
    class: Class,
    message: String,
    cause: Option<Cause>,
    mode: TraceMode,
    transparent: bool,
}

impl ErrorBuilder {
    /// Starts an error of `class`, with the class's default trace mode and
    /// transparency.
    pub fn new(class: &Class) -> Self {
        Self {
            class: class.clone(),
            message: String::new(),
            cause: None,
            mode: TraceMode::initial(class),
            transparent: class.modifiers().transparent(),
        }
    }

    /// Starts from an existing error: same class, message, cause and
    /// transparency.
    ///
    /// Properties, annotations and the trace are not carried over.
    pub fn from_error(error: &Error) -> Self {
        Self {
            cause: error.cause().cloned(),
            message: error.message().to_owned(),
            transparent: error.is_transparent(),
            ..Self::new(error.own_class())
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the cause. A structured cause lets the new error borrow its trace.
    pub fn cause(mut self, cause: impl Into<Cause>) -> Self {
        let cause = cause.into();
        if cause.is_structured() {
            self.mode = if self.class.modifiers().collect_stack_trace() {
                TraceMode::BorrowOrCollect
            } else {
                TraceMode::BorrowOnly
            };
        }
        self.cause = Some(cause);
        self
    }

    /// Requests a fresh trace regardless of class settings and cause.
    pub fn stack_trace(mut self) -> Self {
        self.mode = TraceMode::Trimmed;
        self
    }

    /// Marks the error transparent.
    ///
    /// # Panics
    ///
    /// Panics when no cause has been set.
    #[track_caller]
    pub fn transparent(mut self) -> Self {
        if self.cause.is_none() {
            panic!("{WRAP_WITHOUT_CAUSE}");
        }
        self.transparent = true;
        self
    }

    /// Requests a fresh trace linked to the cause's trace.
    ///
    /// # Panics
    ///
    /// Panics when no cause has been set.
    #[track_caller]
    pub fn enhance_stack_trace(mut self) -> Self {
        let Some(cause) = &self.cause else {
            panic!("{WRAP_WITHOUT_CAUSE}");
        };
        self.mode = if cause.is_structured() { TraceMode::Enhance } else { TraceMode::Collect };
        self
    }

    /// The trace mode the builder would resolve now.
    #[inline]
    pub fn mode(&self) -> TraceMode {
        self.mode
    }

    /// Creates the error. Traces start at the caller of `build`.
    #[inline(never)]
    pub fn build(self) -> Error {
        black_box(self.create(1))
    }

    /// Creates the error, skipping `skip` frames above this one.
    #[inline(never)]
    pub(crate) fn create(self, skip: usize) -> Error {
        let stack_trace = self.resolve_trace(skip + 1);
        Error::from_inner(Inner {
            class: self.class,
            message: self.message,
            cause: self.cause,
            stack_trace,
            properties: PropertyChain::new(),
            transparent: self.transparent,
            has_underlying: false,
            annotations: Default::default(),
        })
    }

    /// Resolves the configured mode into a trace, skipping `skip` frames above
    /// this one when capturing.
    #[inline(never)]
    pub(crate) fn resolve_trace(&self, skip: usize) -> Option<Arc<StackTrace>> {
        let borrowed = self.borrowed_trace();
        match self.mode {
            TraceMode::Omit => None,
            TraceMode::Collect => Some(Arc::new(StackTrace::capture_skipping(skip + 1))),
            TraceMode::Trimmed => Some(Arc::new(StackTrace::capture_skipping(skip + 1).trimmed())),
            TraceMode::BorrowOnly => match borrowed {
                Some(trace) => Some(trace),
                None => Some(Arc::new(StackTrace::capture_skipping(skip + 1))),
            },
            TraceMode::BorrowOrCollect => match borrowed {
                Some(trace) => Some(trace),
                None => Some(Arc::new(StackTrace::capture_skipping(skip + 1).trimmed())),
            },
            TraceMode::Enhance => {
                let fresh = StackTrace::capture_skipping(skip + 1);
                Some(Arc::new(match borrowed {
                    Some(cause) => fresh.with_cause(cause),
                    None => fresh,
                }))
            },
        }
    }

    fn borrowed_trace(&self) -> Option<Arc<StackTrace>> {
        self.cause.as_ref()?.downcast_ref::<Error>()?.stack_trace_arc().cloned()
    }
}
