//! Causal stack traces.
//!
//! A [`StackTrace`] stores raw instruction pointers captured when an error is
//! created, plus an optional link to the trace of its cause. Symbols are only
//! resolved when the trace is rendered.
//!
//! Rendering elides the frames a trace shares with its cause's trace: both are
//! compared from the outermost frame inwards and the common suffix is replaced
//! by a `(<N> duplicated frames)` note. The text format is stable:
//!
//! ```text
//!  at <function>()
//! 	<file>:<line>
//!  ...
//!  (<N> duplicated frames)
//!  ----------------------------------
//! ```

mod render;
pub mod source;
pub mod transformer;

pub use render::TraceFormat;
pub use transformer::{initialize_trace_transformer, PathTransformer, Reinitialized, TraceTransformer};

use smallvec::SmallVec;
use std::fmt;
use std::hint::black_box;
use std::sync::Arc;

/// Upper bound on the number of frames kept per capture.
const MAX_DEPTH: usize = 128;

/// Inline storage for captured instruction pointers.
pub type Frames = SmallVec<[usize; 32]>;

/// Captured call frames of one error, linked to its cause's trace.
#[derive(Clone, Default)]
pub struct StackTrace {
    frames: Frames,
    cause: Option<Arc<StackTrace>>,
    trimmed: bool,
}

impl StackTrace {
    /// Captures the frames of the caller of this function.
    #[inline(never)]
    pub fn capture() -> Self {
        black_box(Self::capture_skipping(1))
    }

    /// Captures the current frames, dropping this function's frame and the
    /// `skip` frames directly above it.
    ///
    /// The capturing frame is located by symbol address; if it cannot be found
    /// every frame is kept.
    #[inline(never)]
    pub(crate) fn capture_skipping(skip: usize) -> Self {
        let marker = Self::capture_skipping as *const () as usize;
        let mut raw: SmallVec<[usize; 64]> = SmallVec::new();
        let mut anchor = None;

        backtrace::trace(|frame| {
            if anchor.is_none() && frame.symbol_address() as usize == marker {
                anchor = Some(raw.len());
            }
            raw.push(frame.ip() as usize);
            raw.len() < MAX_DEPTH * 2
        });

        let start = anchor.map_or(0, |index| index + 1 + skip);
        Self {
            frames: raw.into_iter().skip(start).take(MAX_DEPTH).collect(),
            cause: None,
            trimmed: false,
        }
    }

    /// Builds a trace from already captured instruction pointers.
    pub fn from_addresses(addresses: impl IntoIterator<Item = usize>) -> Self {
        Self { frames: addresses.into_iter().take(MAX_DEPTH).collect(), cause: None, trimmed: false }
    }

    /// Marks the trace for terse rendering: file base names instead of paths.
    #[must_use]
    pub fn trimmed(mut self) -> Self {
        self.trimmed = true;
        self
    }

    /// Links the trace of the cause below this one.
    #[must_use]
    pub fn with_cause(mut self, cause: Arc<StackTrace>) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Raw instruction pointers, innermost first.
    #[inline]
    pub fn addresses(&self) -> &[usize] {
        &self.frames
    }

    #[inline]
    pub fn cause(&self) -> Option<&StackTrace> {
        self.cause.as_deref()
    }

    #[inline]
    pub fn is_trimmed(&self) -> bool {
        self.trimmed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of outermost frames shared with `other`.
    pub fn common_suffix(&self, other: &StackTrace) -> usize {
        self.frames
            .iter()
            .rev()
            .zip(other.frames.iter().rev())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Renders the trace with explicit options instead of the `Display` defaults.
    pub fn render_with(&self, format: &TraceFormat<'_>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = format.render(self, &mut out);
        out
    }

    /// This trace's own frames after removing what its cause already shows,
    /// and the number of elided frames.
    pub(crate) fn own_frames(&self) -> (&[usize], usize) {
        let pc = &self.frames[..];
        let Some(cause) = &self.cause else {
            return (pc, 0);
        };
        let sub = &cause.frames[..];
        let overlap = pc.len().min(sub.len());

        for i in 1..=overlap {
            if pc[pc.len() - i] != sub[sub.len() - i] {
                return (&pc[..pc.len() - i + 1], i - 1);
            }
        }
        (&[], overlap)
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TraceFormat::default().render(self, f)
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackTrace")
            .field("frames", &self.frames.len())
            .field("trimmed", &self.trimmed)
            .field("cause", &self.cause)
            .finish()
    }
}
