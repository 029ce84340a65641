//! Fan many independently produced errors into one composite error.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_fanin::*` or pick focused pieces as needed.
//!
//! - [`Collector`] accumulates errors from any number of threads and drains
//!   into a [`MultiError`] (or `None` when nothing failed).
//! - [`Formatter`] renders a [`MultiError`]; [`FormatConfig`] is the stock
//!   `{message, marker, indent}` layout and any closure works too.
//! - [`Context`] carries a collector down deep call chains so workers can
//!   report without a collector parameter; see [`context::bridge`].
//!
//! # Examples
//!
//! ## Fan-out, then finalize
//!
//! ```
//! use error_fanin::Collector;
//!
//! let collector = Collector::new();
//! std::thread::scope(|s| {
//!     for i in 0..3 {
//!         let collector = &collector;
//!         s.spawn(move || {
//!             collector.register(format!("{i}"));
//!         });
//!     }
//! });
//!
//! let mut messages = collector.finalize().unwrap().messages();
//! messages.sort();
//! assert_eq!(messages, ["0", "1", "2"]);
//! ```
//!
//! ## Custom formatting
//!
//! ```
//! use error_fanin::{Collector, MultiError};
//!
//! let collector = Collector::new();
//! collector.register("1").register("2");
//! collector.set_formatter(|err: &MultiError| format!("{} errors", err.len()));
//!
//! assert_eq!(collector.finalize().unwrap().to_string(), "2 errors");
//! ```
//!
//! ## Reporting through a context
//!
//! ```
//! use std::sync::Arc;
//! use error_fanin::{report_scope, Collector, Context};
//!
//! fn worker(ctx: &Context, id: u32) {
//!     let _ = report_scope(ctx, || if id == 2 { Err(format!("worker {id}")) } else { Ok(()) });
//! }
//!
//! let collector = Arc::new(Collector::new());
//! let ctx = collector.new_context(&Context::background());
//! for id in 0..4 {
//!     worker(&ctx, id);
//! }
//!
//! assert_eq!(collector.finalize().unwrap().messages(), ["worker 2"]);
//! ```

/// Parent-chained context and the collector bridge
pub mod context;
/// Scope-exit reporting macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for reporting `Result`s
pub mod traits;
/// Collector, composite error and formatters
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use context::*;
pub use traits::*;
pub use types::{
    BoxError, Collector, ErrorVec, FormatBuilder, FormatConfig, Formatter, MultiError,
    SharedError, DEFAULT_FORMAT, DEFAULT_FORMAT_MARKER, DEFAULT_INDENT, DEFAULT_MARKER,
    DEFAULT_MESSAGE,
};
