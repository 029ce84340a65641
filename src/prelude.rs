//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_fanin::prelude::*;
//!
//! let collector = Collector::new();
//! let _ = "x".parse::<u8>().report_to(&collector);
//! assert!(collector.finish().is_err());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`defer_report!`]
//! - **Types**: [`Collector`], [`MultiError`], [`Context`], [`ErrorSlot`], [`FormatConfig`]
//! - **Traits**: [`Formatter`], [`ResultExt`]
//! - **Functions**: [`report_scope`]

// Macros
pub use crate::defer_report;

// Core types
pub use crate::context::{report_scope, Context, ErrorSlot};
pub use crate::types::{Collector, FormatConfig, Formatter, MultiError};

// Traits
pub use crate::traits::ResultExt;

#[cfg(feature = "async")]
pub use crate::async_ext::FutureReportExt;
