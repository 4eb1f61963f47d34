//! Process-wide identity counter shared by traits, namespaces and classes.

use core::sync::atomic::{AtomicU64, Ordering};

static CURRENT: AtomicU64 = AtomicU64::new(0);

/// Returns the next process-unique id. Never returns `0`.
#[inline]
pub(crate) fn next() -> u64 {
    CURRENT.fetch_add(1, Ordering::Relaxed) + 1
}
