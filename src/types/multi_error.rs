//! Composite error produced by [`Collector::finalize`](crate::Collector::finalize).

use crate::types::{ErrorVec, Formatter, SharedError};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Immutable snapshot of the errors accumulated by a collector, together with
/// the formatter that renders it.
///
/// A `MultiError` always holds at least one error: an empty round is reported
/// as `None` by the collector instead.
///
/// The underlying errors are kept verbatim and by reference; cloning a
/// `MultiError` clones `Arc`s, not errors.
#[must_use]
#[derive(Clone)]
pub struct MultiError {
    errors: ErrorVec<SharedError>,
    format: Arc<dyn Formatter>,
}

impl MultiError {
    pub(crate) fn new(errors: ErrorVec<SharedError>, format: Arc<dyn Formatter>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors, format }
    }

    /// The accumulated errors in registration order.
    #[inline]
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SharedError> {
        self.errors.iter()
    }

    /// Display strings of the accumulated errors, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// The formatter this snapshot renders with.
    #[inline]
    pub fn formatter(&self) -> &dyn Formatter {
        &*self.format
    }

    /// Returns the same errors rendered by a different formatter.
    ///
    /// ```
    /// use error_fanin::{Collector, MultiError};
    ///
    /// let collector = Collector::new();
    /// collector.register("a").register("b");
    /// let err = collector
    ///     .finalize()
    ///     .unwrap()
    ///     .with_formatter(|e: &MultiError| e.messages().join(", "));
    /// assert_eq!(err.to_string(), "a, b");
    /// ```
    pub fn with_formatter<F>(mut self, format: F) -> Self
    where
        F: Formatter + 'static,
    {
        self.format = Arc::new(format);
        self
    }

    /// Consumes the snapshot and returns the errors.
    #[inline]
    pub fn into_errors(self) -> ErrorVec<SharedError> {
        self.errors
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format.format(self))
    }
}

impl fmt::Debug for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiError")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl std::error::Error for MultiError {}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a SharedError;
    type IntoIter = core::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl Serialize for MultiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MultiError", 1)?;
        state.serialize_field("errors", &self.messages())?;
        state.end()
    }
}
