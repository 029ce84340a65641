//! Future wrapper that reports its error into a context's collector.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context as TaskContext, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::context::{collector_from, Context};
use crate::types::{share, BoxError, SharedError};

pin_project! {
    /// A Future wrapper that registers the inner future's error on completion.
    ///
    /// The async counterpart of a [`DeferredReport`](crate::DeferredReport):
    /// the report happens when the inner future resolves, and the error is
    /// still handed to the awaiting caller, shared with the collector.
    ///
    /// # Cancel Safety
    ///
    /// Dropping the wrapper before completion reports nothing.
    #[must_use = "futures do nothing unless polled"]
    pub struct ReportFuture<Fut> {
        #[pin]
        future: Fut,
        ctx: Option<Context>,
    }
}

impl<Fut> ReportFuture<Fut> {
    #[inline]
    pub fn new(future: Fut, ctx: Context) -> Self {
        Self {
            future,
            ctx: Some(ctx),
        }
    }
}

impl<Fut, T, E> Future for ReportFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = Result<T, SharedError>;

    fn poll(self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let ctx = this.ctx.take();
            res.map_err(|err| {
                let err = share(err);
                if let Some(collector) = ctx.as_ref().and_then(collector_from) {
                    collector.register_shared(err.clone());
                }
                err
            })
        })
    }
}

impl<Fut, T, E> FusedFuture for ReportFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    fn is_terminated(&self) -> bool {
        self.ctx.is_none() || self.future.is_terminated()
    }
}
