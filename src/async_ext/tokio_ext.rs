//! Tokio task-local ambient context.
//!
//! For call chains where even a `&Context` parameter cannot be threaded
//! through, [`scope`] installs a context for the duration of a future and
//! [`report_current`] reports into it from anywhere inside.
//!
//! Task-locals do not follow `tokio::spawn`: a spawned task starts outside
//! any scope and has to be wrapped in its own [`scope`].
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! error-fanin = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;

use crate::context::Context;
use crate::traits::ResultExt;
use crate::types::BoxError;

tokio::task_local! {
    static CURRENT: Context;
}

/// Runs `future` with `ctx` as the ambient context.
///
/// # Example
///
/// ```rust,ignore
/// use error_fanin::async_ext::{report_current, scope};
///
/// let collector = Arc::new(Collector::new());
/// let ctx = collector.new_context(&Context::background());
///
/// scope(ctx, async {
///     report_current(load_user().await);
/// })
/// .await;
/// ```
pub async fn scope<F>(ctx: Context, future: F) -> F::Output
where
    F: Future,
{
    CURRENT.scope(ctx, future).await
}

/// The ambient context, or the empty background context outside any [`scope`].
pub fn current_context() -> Context {
    CURRENT.try_with(Context::clone).unwrap_or_default()
}

/// Reports the error of `result` into the ambient context's collector.
///
/// Outside any [`scope`] the error is dropped; `None` is returned either way
/// on failure.
pub fn report_current<T, E>(result: Result<T, E>) -> Option<T>
where
    E: Into<BoxError>,
{
    result.report_in(&current_context())
}
