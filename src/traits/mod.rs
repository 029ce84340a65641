//! Extension traits for reporting `Result`s into a collector.
//!
//! - [`ResultExt`]: report a failed `Result` directly to a [`Collector`](crate::Collector)
//!   or through a [`Context`](crate::Context).
//!
//! # Examples
//!
//! ```
//! use error_fanin::traits::ResultExt;
//! use error_fanin::Collector;
//!
//! let collector = Collector::new();
//! let port = "80a".parse::<u16>().report_to(&collector);
//!
//! assert_eq!(port, None);
//! assert_eq!(collector.len(), 1);
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
