//! Thread-safe accumulator that fans independent errors into one [`MultiError`].
//!
//! A [`Collector`] is shared by reference (or `Arc`) between any number of
//! workers. Each worker registers its own error; once every worker has
//! finished, the owner calls [`Collector::finalize`] to drain the collector
//! into a composite error, or learn that nothing failed.
//!
//! Registrations racing with `finalize` land either fully before or fully
//! after it. Callers that need every registration in the snapshot must join
//! their workers before finalizing.

use crate::types::{
    share, BoxError, ErrorVec, Formatter, MultiError, SharedError, DEFAULT_FORMAT,
};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct State {
    errors: ErrorVec<SharedError>,
    format: Option<Arc<dyn Formatter>>,
}

/// Concurrency-safe error collector.
///
/// # Examples
///
/// ```
/// use error_fanin::Collector;
///
/// let collector = Collector::new();
/// std::thread::scope(|s| {
///     for i in 0..4 {
///         let collector = &collector;
///         s.spawn(move || {
///             if i % 2 == 1 {
///                 collector.register(format!("worker {i} failed"));
///             }
///         });
///     }
/// });
///
/// let err = collector.finalize().expect("two workers failed");
/// assert_eq!(err.len(), 2);
/// assert!(collector.finalize().is_none());
/// ```
pub struct Collector {
    state: Mutex<State>,
    fallback: Arc<dyn Formatter>,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    /// Creates an empty collector rendering with [`DEFAULT_FORMAT`].
    pub fn new() -> Self {
        Self::with_fallback(DEFAULT_FORMAT)
    }

    /// Creates an empty collector rendering with `fallback` whenever no
    /// override is set through [`set_formatter`](Self::set_formatter).
    ///
    /// Unlike the override, the fallback survives [`finalize`](Self::finalize).
    pub fn with_fallback<F>(fallback: F) -> Self
    where
        F: Formatter + 'static,
    {
        Self {
            state: Mutex::new(State::default()),
            fallback: Arc::new(fallback),
        }
    }

    // The guarded state is consistent between any two statements, so a panic
    // in another registrant never leaves it half-written.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `error` to the collector.
    pub fn register<E>(&self, error: E) -> &Self
    where
        E: Into<BoxError>,
    {
        self.register_shared(share(error))
    }

    /// Appends an already shared error, keeping its identity.
    pub fn register_shared(&self, error: SharedError) -> &Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(error = %error, "registering error");

        self.lock().errors.push(error);
        self
    }

    /// Appends `error` if present; `None` is a no-op.
    pub fn register_opt<E>(&self, error: Option<E>) -> &Self
    where
        E: Into<BoxError>,
    {
        match error {
            Some(error) => self.register(error),
            None => self,
        }
    }

    /// Registers the error of a failed `result` and returns the success value, if any.
    ///
    /// ```
    /// use error_fanin::Collector;
    ///
    /// let collector = Collector::new();
    /// let parsed: Vec<u8> = ["1", "x", "3"]
    ///     .iter()
    ///     .filter_map(|s| collector.register_result(s.parse::<u8>()))
    ///     .collect();
    ///
    /// assert_eq!(parsed, [1, 3]);
    /// assert_eq!(collector.len(), 1);
    /// ```
    pub fn register_result<T, E>(&self, result: Result<T, E>) -> Option<T>
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.register(error);
                None
            }
        }
    }

    /// Overrides the formatter for the current round. Last write wins.
    pub fn set_formatter<F>(&self, format: F) -> &Self
    where
        F: Formatter + 'static,
    {
        self.lock().format = Some(Arc::new(format));
        self
    }

    /// Number of errors registered since the last finalize.
    pub fn len(&self) -> usize {
        self.lock().errors.len()
    }

    /// Whether nothing was registered since the last finalize.
    pub fn is_empty(&self) -> bool {
        self.lock().errors.is_empty()
    }

    /// Drains the collector.
    ///
    /// Returns `None` if nothing was registered since the previous finalize,
    /// otherwise a [`MultiError`] holding the registered errors in order and
    /// rendered by the override formatter (or the fallback). Either way the
    /// collector is left empty with its override cleared.
    pub fn finalize(&self) -> Option<MultiError> {
        let (errors, format) = {
            let mut state = self.lock();
            (core::mem::take(&mut state.errors), state.format.take())
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(count = errors.len(), "finalized collector");

        if errors.is_empty() {
            return None;
        }
        let format = format.unwrap_or_else(|| Arc::clone(&self.fallback));
        Some(MultiError::new(errors, format))
    }

    /// [`finalize`](Self::finalize) shaped for `?` propagation.
    ///
    /// ```
    /// use error_fanin::{Collector, MultiError};
    ///
    /// fn check(values: &[i32]) -> Result<(), MultiError> {
    ///     let collector = Collector::new();
    ///     for v in values.iter().filter(|v| **v < 0) {
    ///         collector.register(format!("{v} is negative"));
    ///     }
    ///     collector.finish()
    /// }
    ///
    /// assert!(check(&[1, 2]).is_ok());
    /// assert_eq!(check(&[1, -2, -3]).unwrap_err().len(), 2);
    /// ```
    pub fn finish(&self) -> Result<(), MultiError> {
        match self.finalize() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Snapshot first: error `Debug` impls may call back into the collector.
        let (errors, has_formatter) = {
            let state = self.lock();
            (state.errors.clone(), state.format.is_some())
        };
        f.debug_struct("Collector")
            .field("errors", &errors)
            .field("has_formatter", &has_formatter)
            .finish_non_exhaustive()
    }
}
