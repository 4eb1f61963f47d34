use super::source::SourceCache;
use super::transformer::{PathTransformer, TraceTransformer};
use super::StackTrace;
use smallvec::SmallVec;
use std::ffi::c_void;
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

const SEPARATOR: &str = "\n ---------------------------------- ";

/// Rendering options for a [`StackTrace`].
///
/// Without an explicit transformer the process-wide one is used.
#[derive(Clone, Copy, Default)]
pub struct TraceFormat<'a> {
    transformer: Option<&'a PathTransformer>,
    show_source: bool,
}

impl<'a> TraceFormat<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites file paths with `transformer` instead of the global one.
    #[must_use]
    pub fn transformer(mut self, transformer: &'a PathTransformer) -> Self {
        self.transformer = Some(transformer);
        self
    }

    /// Prints the source line below each frame when the file is readable.
    #[must_use]
    pub fn show_source(mut self, show: bool) -> Self {
        self.show_source = show;
        self
    }

    /// Writes `trace` and its causes.
    pub fn render<W: Write + ?Sized>(&self, trace: &StackTrace, out: &mut W) -> fmt::Result {
        match self.transformer {
            Some(transformer) => self.render_level(trace, transformer, out),
            None => {
                let global = TraceTransformer::global().current();
                self.render_level(trace, &global, out)
            },
        }
    }

    fn render_level<W: Write + ?Sized>(
        &self,
        trace: &StackTrace,
        transformer: &PathTransformer,
        out: &mut W,
    ) -> fmt::Result {
        let (own, cropped) = trace.own_frames();

        if !own.is_empty() {
            for &ip in own {
                for frame in resolve(ip) {
                    if frame.is_runtime() {
                        continue;
                    }
                    self.render_frame(&frame, trace.trimmed, transformer, out)?;
                }
            }

            if cropped > 0 {
                write!(out, "\n ...\n ({cropped} duplicated frames)")?;
            }

            if trace.cause.is_some() {
                out.write_str(SEPARATOR)?;
            }
        }

        match &trace.cause {
            Some(cause) => self.render_level(cause, transformer, out),
            None => Ok(()),
        }
    }

    fn render_frame<W: Write + ?Sized>(
        &self,
        frame: &ResolvedFrame,
        trimmed: bool,
        transformer: &PathTransformer,
        out: &mut W,
    ) -> fmt::Result {
        write!(out, "\n at {}()\n\t", frame.function)?;
        match &frame.file {
            Some(file) if trimmed => {
                let base = file.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
                out.write_str(&base)?;
            },
            Some(file) => out.write_str(&transformer.apply(&file.to_string_lossy()))?,
            None => out.write_str("<unknown>")?,
        }
        write!(out, ":{}", frame.line)?;

        if self.show_source {
            if let Some(file) = &frame.file {
                if let Some(text) = SourceCache::global().line(file, frame.line) {
                    write!(out, "\n\t\t{text}")?;
                }
            }
        }
        Ok(())
    }
}

struct ResolvedFrame {
    function: String,
    file: Option<PathBuf>,
    line: u32,
}

impl ResolvedFrame {
    /// Frames inside the Rust standard library and test harness.
    fn is_runtime(&self) -> bool {
        self.file.as_deref().is_some_and(is_runtime_path)
    }
}

fn is_runtime_path(path: &Path) -> bool {
    let path = path.to_string_lossy();
    path.starts_with("/rustc/")
        || ["library/std/", "library/core/", "library/alloc/", "library/test/"]
            .iter()
            .any(|dir| path.contains(dir))
}

/// Resolves one instruction pointer; inlined calls yield several frames.
fn resolve(ip: usize) -> SmallVec<[ResolvedFrame; 2]> {
    let mut frames = SmallVec::new();
    // Return addresses point past the call instruction.
    let address = ip.saturating_sub(1) as *mut c_void;

    backtrace::resolve(address, |symbol| {
        frames.push(ResolvedFrame {
            function: symbol
                .name()
                .map(|name| format!("{name:#}"))
                .unwrap_or_else(|| "<unknown>".to_owned()),
            file: symbol.filename().map(Path::to_path_buf),
            line: symbol.lineno().unwrap_or(0),
        });
    });

    if frames.is_empty() {
        frames.push(ResolvedFrame { function: format!("{ip:#x}"), file: None, line: 0 });
    }
    frames
}
