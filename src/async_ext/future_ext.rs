//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.report_in()`, mirroring the sync
//! [`ResultExt::report_in`](crate::traits::ResultExt::report_in).

use core::future::Future;

use crate::context::Context;

use super::report_future::ReportFuture;

/// Extension trait for reporting the error of a Result-returning future.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use error_fanin::async_ext::FutureReportExt;
/// use error_fanin::{Collector, Context};
///
/// async fn fetch(id: u32) -> Result<u32, String> {
///     if id == 0 { Err("id 0 does not exist".into()) } else { Ok(id) }
/// }
///
/// async fn run(ctx: Context) -> usize {
///     let mut found = 0;
///     for id in 0..3 {
///         if fetch(id).report_in(&ctx).await.is_ok() {
///             found += 1;
///         }
///     }
///     found
/// }
///
/// let collector = Arc::new(Collector::new());
/// let ctx = collector.new_context(&Context::background());
/// # let _ = run(ctx);
/// ```
pub trait FutureReportExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Registers the error into the collector attached to `ctx` on completion.
    #[inline]
    fn report_in(self, ctx: &Context) -> ReportFuture<Self> {
        ReportFuture::new(self, ctx.clone())
    }
}

impl<F, T, E> FutureReportExt<T, E> for F where F: Future<Output = Result<T, E>> {}
