//! Cached source lines for rich trace rendering.
//!
//! Files are read once and kept for the life of the cache. The set of files is
//! bounded by the sources that appear in captured traces. Unreadable files are
//! cached as missing.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type Lines = Option<Arc<[String]>>;

#[derive(Default)]
pub struct SourceCache {
    files: RwLock<HashMap<PathBuf, Lines>>,
}

static GLOBAL: Lazy<SourceCache> = Lazy::new(SourceCache::new);

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static SourceCache {
        &GLOBAL
    }

    /// Trimmed text of 1-based `line` in `path`.
    pub fn line(&self, path: &Path, line: u32) -> Option<String> {
        let index = (line as usize).checked_sub(1)?;
        let lines = self.lines(path)?;
        lines.get(index).map(|text| text.trim().to_owned())
    }

    /// Number of files cached, readable or not.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }

    fn lines(&self, path: &Path) -> Lines {
        if let Some(cached) = self.files.read().get(path) {
            return cached.clone();
        }

        let loaded: Lines = std::fs::read_to_string(path)
            .ok()
            .map(|text| text.lines().map(str::to_owned).collect());

        self.files.write().entry(path.to_path_buf()).or_insert(loaded).clone()
    }
}
