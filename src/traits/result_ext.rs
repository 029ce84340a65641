//! Extension trait for handing `Result` errors to a collector.
//!
//! This module provides [`ResultExt`], which turns "register the error, keep
//! the value" into a single call instead of a `match` at every site.

use crate::context::{add_to_context, Context, ErrorSlot};
use crate::types::{BoxError, Collector};

/// Reports the error of a `Result` and keeps its success value.
///
/// Both methods return `Some(value)` on success and `None` after reporting a
/// failure, so they compose with `filter_map` and `?` on `Option`.
///
/// # Examples
///
/// ## Explicit collector
///
/// ```
/// use error_fanin::traits::ResultExt;
/// use error_fanin::Collector;
///
/// let collector = Collector::new();
/// let ok: Result<u8, String> = Ok(7);
/// assert_eq!(ok.report_to(&collector), Some(7));
/// assert!(collector.is_empty());
/// ```
///
/// ## Through a context
///
/// ```
/// use std::sync::Arc;
/// use error_fanin::traits::ResultExt;
/// use error_fanin::{Collector, Context};
///
/// let collector = Arc::new(Collector::new());
/// let ctx = collector.new_context(&Context::background());
///
/// let failed: Result<u8, String> = Err("lost".into());
/// assert_eq!(failed.report_in(&ctx), None);
/// assert_eq!(collector.len(), 1);
/// ```
pub trait ResultExt<T, E> {
    /// Registers the error into `collector`.
    fn report_to(self, collector: &Collector) -> Option<T>;

    /// Registers the error into the collector attached to `ctx`, if any.
    ///
    /// Without an attached collector the error is dropped and `None` is
    /// still returned.
    fn report_in(self, ctx: &Context) -> Option<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn report_to(self, collector: &Collector) -> Option<T> {
        collector.register_result(self)
    }

    fn report_in(self, ctx: &Context) -> Option<T> {
        let slot = ErrorSlot::new();
        let value = slot.capture(self);
        add_to_context(ctx, Some(&slot));
        value
    }
}
