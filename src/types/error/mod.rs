//! The structured error value.
//!
//! An [`Error`] is an immutable, cheaply cloned handle. Every method that adds
//! information ([`with`](Error::with), [`also`](Error::also),
//! [`annotate`](Error::annotate), [`retraced`](Error::retraced)) returns a new
//! value and leaves the receiver untouched; property chains are shared between
//! the two.
//!
//! Classification skips transparent wrappers: [`Error::class`], [`Error::has`]
//! and [`Error::extends`] answer for the first opaque error down the cause chain.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{decorate, Namespace, Trait};
//!
//! let timeout = Trait::new("timeout");
//! let dial = Namespace::new("net", &[]).class("dial", &[timeout.clone()]);
//!
//! let err = dial.error("dial timed out").with("host", "db-1");
//! let wrapped = decorate(err.clone(), "connecting to primary");
//!
//! assert_eq!(wrapped.class(), &dial);
//! assert!(wrapped.has(&timeout));
//! assert_eq!(wrapped.property("host").bind::<&str>(), Some("db-1"));
//! assert_eq!(
//!     wrapped.to_string(),
//!     "connecting to primary, cause: net.dial: dial timed out {host: db-1}"
//! );
//! ```

mod annotations;
mod summary;
mod walk;

pub use annotations::ErrorChain;
pub(crate) use annotations::Annotations;
pub use walk::StructuredChain;

use crate::common::FOREIGN;
use crate::stacktrace::StackTrace;
use crate::types::builder::ErrorBuilder;
use crate::types::cause::{Cause, Underlying};
use crate::types::class::Class;
use crate::types::error_formatter::ErrorFormatBuilder;
use crate::types::property::{PropertyChain, PropertyResult, PropertyValue, UNDERLYING};
use crate::types::trait_tag::Trait;
use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct Inner {
    pub(crate) class: Class,
    pub(crate) message: String,
    pub(crate) cause: Option<Cause>,
    pub(crate) stack_trace: Option<Arc<StackTrace>>,
    pub(crate) properties: PropertyChain,
    pub(crate) transparent: bool,
    pub(crate) has_underlying: bool,
    pub(crate) annotations: Annotations,
}

/// A classified, causally chained error.
#[derive(Clone)]
pub struct Error {
    inner: Arc<Inner>,
}

impl Error {
    pub(crate) fn from_inner(inner: Inner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    fn update(&self, apply: impl FnOnce(&mut Inner)) -> Self {
        let mut inner = (*self.inner).clone();
        apply(&mut inner);
        Self::from_inner(inner)
    }

    /// Class of the first opaque error in the cause chain, or the private
    /// foreign class when every structured link is transparent.
    pub fn class(&self) -> &Class {
        match self.opaque() {
            Some(error) => &error.inner.class,
            None => &*FOREIGN,
        }
    }

    /// The class this error was created with, ignoring transparency.
    #[inline]
    pub fn own_class(&self) -> &Class {
        &self.inner.class
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// The direct cause, structured or not.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.inner.cause.as_ref()
    }

    #[inline]
    pub fn stack_trace(&self) -> Option<&StackTrace> {
        self.inner.stack_trace.as_deref()
    }

    pub(crate) fn stack_trace_arc(&self) -> Option<&Arc<StackTrace>> {
        self.inner.stack_trace.as_ref()
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.inner.transparent
    }

    /// Whether the classifying error's class carries `t`.
    pub fn has(&self, t: &Trait) -> bool {
        self.opaque().is_some_and(|error| error.inner.class.has(t))
    }

    /// Whether the classifying error's class is `class` or one of its subclasses.
    pub fn extends(&self, class: &Class) -> bool {
        self.opaque().is_some_and(|error| error.inner.class.is(class))
    }

    /// Whether this error extends the class of the structured error in `other`.
    pub fn belongs(&self, other: &(dyn StdError + 'static)) -> bool {
        crate::inspect::find_structured(other).is_some_and(|typed| self.extends(typed.class()))
    }

    /// Looks `key` up in own properties, then through transparent causes.
    pub fn property(&self, key: &str) -> PropertyResult {
        let mut current = Some(self);
        while let Some(error) = current {
            if let Some(value) = error.inner.properties.get(key) {
                return PropertyResult::found(value.clone());
            }
            if !error.inner.transparent {
                break;
            }
            current = error.structured_cause();
        }
        PropertyResult::empty()
    }

    /// Own properties only.
    #[inline]
    pub fn properties(&self) -> &PropertyChain {
        &self.inner.properties
    }

    /// A copy of this error with `key` bound to `value`.
    #[must_use]
    pub fn with<V>(&self, key: impl Into<Cow<'static, str>>, value: V) -> Error
    where
        V: PropertyValue,
    {
        let properties = self.inner.properties.set(key, value);
        self.update(|inner| inner.properties = properties)
    }

    /// A copy of this error with `errors` appended to its underlying errors.
    ///
    /// `None` entries are skipped. When nothing is appended the receiver
    /// itself is returned.
    #[must_use]
    pub fn also<I, C>(&self, errors: I) -> Error
    where
        I: IntoIterator<Item = Option<C>>,
        C: Into<Cause>,
    {
        let existing = self.underlying();
        let mut joined: Vec<Cause> = existing.to_vec();
        joined.extend(errors.into_iter().flatten().map(Into::into));

        if joined.len() == existing.len() {
            return self.clone();
        }

        let underlying = Underlying(joined.into());
        let properties = self.inner.properties.set(UNDERLYING, underlying);
        self.update(|inner| {
            inner.properties = properties;
            inner.has_underlying = true;
        })
    }

    /// Shortcut for [`also`](Self::also) with a single error.
    #[must_use]
    pub fn join(&self, error: impl Into<Cause>) -> Error {
        self.also([Some(error.into())])
    }

    /// Errors joined with [`also`](Self::also), oldest first.
    ///
    /// A value stored under the same key with [`with`](Self::with) is not a
    /// list of errors and is skipped.
    pub fn underlying(&self) -> &[Cause] {
        if !self.inner.has_underlying {
            return &[];
        }
        self.inner
            .properties
            .iter()
            .filter(|(key, _)| *key == UNDERLYING)
            .find_map(|(_, value)| {
                let value: &dyn PropertyValue = &**value;
                PropertyValue::as_any(value).downcast_ref::<Underlying>()
            })
            .map(Underlying::as_slice)
            .unwrap_or_default()
    }

    /// Whether both handles point at the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Error) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Rendering options for this error.
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// A copy of this error with a fresh trimmed trace starting at the caller.
    #[inline(never)]
    #[must_use]
    pub fn retraced(&self) -> Error {
        let stack_trace = ErrorBuilder::from_error(self).stack_trace().resolve_trace(1);
        self.update(|inner| inner.stack_trace = stack_trace)
    }

    /// A copy of this error whose fresh trace is linked to the cause's trace.
    ///
    /// Without a cause the receiver is returned unchanged.
    #[inline(never)]
    #[must_use]
    pub fn enhanced(&self) -> Error {
        if self.inner.cause.is_none() {
            return self.clone();
        }
        let stack_trace = ErrorBuilder::from_error(self).enhance_stack_trace().resolve_trace(1);
        self.update(|inner| inner.stack_trace = stack_trace)
    }

    /// Runs `f`, turning a panic into this error with the panic joined as an
    /// underlying error.
    ///
    /// This is the only place where panics are converted into errors.
    pub fn recover<F, R>(&self, f: F) -> Result<R, Error>
    where
        F: FnOnce() -> R,
    {
        panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| match payload.downcast::<Error>() {
            Ok(error) => self.join(*error),
            Err(payload) => self.join(PanicPayload::from_any(payload.as_ref())),
        })
    }

    /// Unwinds with this error as the panic payload.
    pub fn panic(&self) -> ! {
        panic::panic_any(self.clone())
    }

    /// Starts a set of annotation updates.
    pub fn annotate(&self) -> ErrorChain {
        ErrorChain::new((*self.inner).clone())
    }

    /// The cause, when it is itself an [`Error`].
    fn structured_cause(&self) -> Option<&Error> {
        self.inner.cause.as_ref()?.downcast_ref::<Error>()
    }
}

/// Panic payload that was not an [`Error`].
#[derive(Debug)]
struct PanicPayload(String);

impl PanicPayload {
    fn from_any(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_owned()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "panic with a non-string payload".to_owned()
        };
        Self(message)
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for PanicPayload {}

impl fmt::Display for Error {
    /// `{}` prints the summary; `{:#}` adds the causal stack trace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())?;
        if f.alternate() {
            if let Some(trace) = self.stack_trace() {
                fmt::Display::fmt(trace, f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("class", &self.inner.class.name())
            .field("message", &self.inner.message)
            .field("cause", &self.inner.cause)
            .field("properties", &self.inner.properties)
            .field("transparent", &self.inner.transparent)
            .finish_non_exhaustive()
    }
}

impl StdError for Error {
    /// Only transparent errors expose their cause to generic unwrapping.
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.inner.cause {
            Some(cause) if self.inner.transparent => Some(cause.as_error()),
            _ => None,
        }
    }
}
