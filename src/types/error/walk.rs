//! Traversal of the structured part of a cause chain.

use super::Error;
use std::iter::FusedIterator;

/// Iterator over an error and every structured error below it.
///
/// The walk ends at the first cause that is not itself an [`Error`]; structured
/// errors hidden behind a foreign wrapper are left to
/// [`inspect`](crate::inspect).
#[derive(Clone)]
pub struct StructuredChain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for StructuredChain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.structured_cause();
        Some(current)
    }
}

impl FusedIterator for StructuredChain<'_> {}

impl Error {
    /// This error followed by the structured errors in its cause chain.
    pub fn chain(&self) -> StructuredChain<'_> {
        StructuredChain { next: Some(self) }
    }

    /// The first non-transparent error, walking causes while transparent.
    pub(crate) fn opaque(&self) -> Option<&Error> {
        let mut current = self;
        loop {
            if !current.inner.transparent {
                return Some(current);
            }
            current = current.structured_cause()?;
        }
    }

    /// First value `read` returns along the chain.
    pub(crate) fn deep<'a, T: 'a>(&'a self, read: impl FnMut(&'a Error) -> Option<T>) -> Option<T> {
        self.chain().find_map(read)
    }
}
