//! Configurable rendering of an [`Error`].
//!
//! `Display` covers the two common cases (`{}` for the summary, `{:#}` for the
//! summary plus trace). [`ErrorFormatBuilder`] exposes the rest: dropping the
//! property block, printing source lines, or rewriting paths with a specific
//! transformer.
//!
//! # Examples
//!
//! ```
//! use error_taxon::Namespace;
//!
//! let class = Namespace::new("fmt_docs", &[]).class("parse", &[]);
//! let err = class.error("bad header").with("line", 3);
//!
//! assert_eq!(err.fmt().to_string(), "fmt_docs.parse: bad header {line: 3}");
//! assert_eq!(err.fmt().compact().to_string(), "fmt_docs.parse: bad header");
//! assert!(err.fmt().rich().to_string().contains("\n at "));
//! ```

use crate::stacktrace::{PathTransformer, TraceFormat};
use crate::types::error::Error;
use std::fmt::{self, Display};

/// Which parts of an error are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub show_properties: bool,
    pub show_trace: bool,
    pub show_source: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self { show_properties: true, show_trace: false, show_source: false }
    }
}

impl ErrorFormatConfig {
    /// Summary plus the causal stack trace.
    #[inline]
    pub fn rich() -> Self {
        Self { show_trace: true, ..Default::default() }
    }

    /// Summary without the property block.
    #[inline]
    pub fn compact() -> Self {
        Self { show_properties: false, ..Default::default() }
    }

    /// Everything, including source lines under each frame.
    #[inline]
    pub fn verbose() -> Self {
        Self { show_properties: true, show_trace: true, show_source: true }
    }
}

/// Builder for customizing error display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a Error,
    pub(crate) config: ErrorFormatConfig,
    pub(crate) transformer: Option<&'a PathTransformer>,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ErrorFormatConfig::default(), transformer: None }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn show_properties(mut self, show: bool) -> Self {
        self.config.show_properties = show;
        self
    }

    pub fn show_trace(mut self, show: bool) -> Self {
        self.config.show_trace = show;
        self
    }

    /// Prints source lines under each frame; implies `show_trace`.
    pub fn show_source(mut self, show: bool) -> Self {
        self.config.show_source = show;
        if show {
            self.config.show_trace = true;
        }
        self
    }

    /// Rewrites trace paths with `transformer` instead of the global one.
    pub fn transformer(mut self, transformer: &'a PathTransformer) -> Self {
        self.transformer = Some(transformer);
        self
    }

    pub fn rich(mut self) -> Self {
        self.config = ErrorFormatConfig::rich();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn verbose(mut self) -> Self {
        self.config = ErrorFormatConfig::verbose();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error.render_summary(self.config.show_properties))?;

        if !self.config.show_trace {
            return Ok(());
        }
        let Some(trace) = self.error.stack_trace() else {
            return Ok(());
        };

        let mut format = TraceFormat::new().show_source(self.config.show_source);
        if let Some(transformer) = self.transformer {
            format = format.transformer(transformer);
        }
        format.render(trace, f)
    }
}
