//! Error values, storage, the composite error and its formatters.
//!
//! Every error handed to a [`Collector`] is stored as a [`SharedError`]: an
//! opaque, reference-counted `dyn Error` that the crate never inspects beyond
//! its `Display` output.
//!
//! # Examples
//!
//! ```
//! use error_fanin::Collector;
//!
//! let collector = Collector::new();
//! collector.register("disk full").register("quota exceeded");
//!
//! let err = collector.finalize().unwrap();
//! assert_eq!(err.len(), 2);
//! assert_eq!(err.to_string(), "errors found:\n  ✔ disk full\n  ✔ quota exceeded");
//! ```
use smallvec::SmallVec;
use std::sync::Arc;

pub mod collector;
pub mod error_formatter;
pub mod multi_error;

pub use collector::Collector;
pub use error_formatter::*;
pub use multi_error::MultiError;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for up to 4 elements to avoid heap allocations
/// in the common case of a handful of failed workers.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Owned, type-erased error accepted by the registration methods.
///
/// Anything convertible into this (every `std::error::Error + Send + Sync`,
/// `String`, `&str`) can be registered.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Shared, immutable error value as stored in a [`Collector`] and [`MultiError`].
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Converts anything registrable into a [`SharedError`].
///
/// An error that already is a `SharedError` is handed back as is, so its
/// identity and concrete type survive re-registration.
pub(crate) fn share<E>(error: E) -> SharedError
where
    E: Into<BoxError>,
{
    let boxed: BoxError = error.into();
    match boxed.downcast::<SharedError>() {
        Ok(shared) => *shared,
        Err(boxed) => Arc::from(boxed),
    }
}
