//! Async extensions for error-fanin.
//!
//! Futures that resolve to `Result<T, E>` can report their error into the
//! collector of a [`Context`](crate::Context) when they complete, the async
//! equivalent of arming a [`DeferredReport`](crate::DeferredReport).
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-fanin = { version = "0.3", features = ["async"] }
//! ```
//!
//! The `async-tokio` feature additionally provides a task-local ambient
//! context (see [`scope`] and [`report_current`]).

mod future_ext;
mod report_future;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use future_ext::FutureReportExt;
pub use report_future::ReportFuture;

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{current_context, report_current, scope};
