//! Descriptive annotations: owner, hint, public message, domain, tags, timing.
//!
//! Annotations never affect classification. Readers look them up along the
//! whole structured cause chain, transparent or not, returning the first value
//! found; [`Error::span`] is the exception and reads only the error itself.
//!
//! # Examples
//!
//! ```
//! use error_taxon::Namespace;
//!
//! let class = Namespace::new("orders", &[]).class("rejected", &[]);
//! let inner = class.error("stock exhausted").annotate().owner("inventory").tag("sku", "A-1").done();
//! let outer = class.wrap(inner, "order rejected").annotate().hint("retry later").tag("sku", "B-2").done();
//!
//! assert_eq!(outer.owner(), Some("inventory"));
//! assert_eq!(outer.hint(), Some("retry later"));
//! assert_eq!(outer.tags()["sku"], "B-2");
//! ```

use super::{Error, Inner};
use crate::types::cause::Cause;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

/// Annotation fields stored on one error.
#[derive(Clone, Default)]
pub(crate) struct Annotations {
    owner: Option<Arc<str>>,
    public: Option<Arc<str>>,
    hint: Option<Arc<str>>,
    span: Option<Arc<str>>,
    trace_id: Option<Arc<str>>,
    domain: Option<Arc<str>>,
    tags: Arc<BTreeMap<String, String>>,
    time: Option<SystemTime>,
    duration: Option<Duration>,
}

/// Collects annotation updates and produces a new [`Error`].
///
/// Created by [`Error::annotate`]; the original error is not modified.
#[must_use = "call `done` to obtain the annotated error"]
pub struct ErrorChain {
    inner: Inner,
}

impl ErrorChain {
    pub(super) fn new(inner: Inner) -> Self {
        Self { inner }
    }

    /// Team or component responsible for the failure.
    pub fn owner(mut self, owner: impl Into<Arc<str>>) -> Self {
        self.inner.annotations.owner = Some(owner.into());
        self
    }

    /// Message safe to show to end users.
    pub fn public(mut self, public: impl Into<Arc<str>>) -> Self {
        self.inner.annotations.public = Some(public.into());
        self
    }

    /// Suggestion on how to resolve the failure.
    pub fn hint(mut self, hint: impl Into<Arc<str>>) -> Self {
        self.inner.annotations.hint = Some(hint.into());
        self
    }

    pub fn span(mut self, span: impl Into<Arc<str>>) -> Self {
        self.inner.annotations.span = Some(span.into());
        self
    }

    /// Correlation id of the request that failed.
    pub fn trace_id(mut self, trace_id: impl Into<Arc<str>>) -> Self {
        self.inner.annotations.trace_id = Some(trace_id.into());
        self
    }

    /// Functional area the failure belongs to.
    pub fn domain(mut self, domain: impl Into<Arc<str>>) -> Self {
        self.inner.annotations.domain = Some(domain.into());
        self
    }

    /// Replaces all tags.
    pub fn tags<K, V>(mut self, tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let tags = tags.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.inner.annotations.tags = Arc::new(tags);
        self
    }

    /// Adds or overwrites one tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.inner.annotations.tags).insert(key.into(), value.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.inner.annotations.duration = Some(duration);
        self
    }

    /// Sets the duration to the time elapsed since `start`.
    pub fn since(self, start: Instant) -> Self {
        self.duration(start.elapsed())
    }

    /// When the failure happened.
    pub fn time(mut self, time: SystemTime) -> Self {
        self.inner.annotations.time = Some(time);
        self
    }

    /// Replaces the cause.
    pub fn cause(mut self, cause: impl Into<Cause>) -> Self {
        self.inner.cause = Some(cause.into());
        self
    }

    pub fn done(self) -> Error {
        Error::from_inner(self.inner)
    }
}

impl fmt::Debug for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorChain").field("class", &self.inner.class.name()).finish_non_exhaustive()
    }
}

impl Error {
    pub fn owner(&self) -> Option<&str> {
        self.deep(|e| e.inner.annotations.owner.as_deref())
    }

    pub fn public(&self) -> Option<&str> {
        self.deep(|e| e.inner.annotations.public.as_deref())
    }

    pub fn hint(&self) -> Option<&str> {
        self.deep(|e| e.inner.annotations.hint.as_deref())
    }

    pub fn domain(&self) -> Option<&str> {
        self.deep(|e| e.inner.annotations.domain.as_deref())
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.deep(|e| e.inner.annotations.trace_id.as_deref())
    }

    pub fn time(&self) -> Option<SystemTime> {
        self.deep(|e| e.inner.annotations.time)
    }

    pub fn duration(&self) -> Option<Duration> {
        self.deep(|e| e.inner.annotations.duration)
    }

    /// Span recorded on this error only.
    pub fn span(&self) -> Option<&str> {
        self.inner.annotations.span.as_deref()
    }

    /// Tags of the whole chain; on conflicting keys the outermost error wins.
    pub fn tags(&self) -> BTreeMap<String, String> {
        let mut merged = BTreeMap::new();
        for error in self.chain() {
            for (key, value) in error.inner.annotations.tags.iter() {
                merged.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        merged
    }
}
