//! Type-erased cause of an [`Error`](crate::Error).
//!
//! A [`Cause`] holds any `std::error::Error`, structured or foreign. Structured
//! causes are recognised with [`Cause::is_structured`] or
//! [`Cause::downcast_ref`]; [`Cause::cast`] also looks through the `source()`
//! chain of foreign wrappers.

use crate::types::error::Error;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Shared handle to the error that caused another one.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    /// Wraps any error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Wraps an already boxed error.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }

    /// The wrapped error.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// The first structured error in this cause's `source()` chain.
    pub fn cast(&self) -> Option<&Error> {
        crate::inspect::find_structured(self.as_error())
    }

    /// Whether the wrapped error is itself structured, without unwrapping.
    pub fn is_structured(&self) -> bool {
        self.0.downcast_ref::<Error>().is_some()
    }

    /// The wrapped error as `E`, without unwrapping.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// The errors joined to a primary error with [`Error::also`](crate::Error::also).
#[derive(Clone, Debug)]
pub struct Underlying(pub(crate) Arc<[Cause]>);

impl Underlying {
    #[inline]
    pub fn as_slice(&self) -> &[Cause] {
        &self.0
    }
}

impl fmt::Display for Underlying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(cause, f)?;
        }
        Ok(())
    }
}
