//! Tests for reporting futures.

use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context as TaskContext, Poll};

use error_fanin::async_ext::{FutureReportExt, ReportFuture};
use futures_core::future::FusedFuture;
use error_fanin::{Collector, Context};

#[derive(Debug, Clone)]
struct FetchError(u32);

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fetch {} failed", self.0)
    }
}

impl std::error::Error for FetchError {}

async fn fetch(id: u32) -> Result<u32, FetchError> {
    tokio::task::yield_now().await;
    if id % 3 == 0 {
        Err(FetchError(id))
    } else {
        Ok(id * 10)
    }
}

fn collector_context() -> (Arc<Collector>, Context) {
    let collector = Arc::new(Collector::new());
    let ctx = collector.new_context(&Context::background());
    (collector, ctx)
}

#[tokio::test]
async fn report_in_passes_success_through() {
    let (collector, ctx) = collector_context();

    assert_eq!(fetch(1).report_in(&ctx).await.unwrap(), 10);
    assert!(collector.finalize().is_none());
}

#[tokio::test]
async fn report_in_registers_and_returns_shared_error() {
    let (collector, ctx) = collector_context();

    let err = fetch(3).report_in(&ctx).await.unwrap_err();
    assert_eq!(err.to_string(), "fetch 3 failed");

    let merr = collector.finalize().unwrap();
    assert!(Arc::ptr_eq(&err, &merr.errors()[0]));
}

#[tokio::test]
async fn report_in_without_collector_only_returns_error() {
    let err = fetch(6).report_in(&Context::background()).await.unwrap_err();
    assert!(err.downcast_ref::<FetchError>().is_some());
}

#[tokio::test]
async fn dropped_future_reports_nothing() {
    let (collector, ctx) = collector_context();

    drop(fetch(0).report_in(&ctx));
    assert!(collector.finalize().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_tasks_report_into_shared_context() {
    let (collector, ctx) = collector_context();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                async move { Err::<(), _>(format!("{i}")) }
                    .report_in(&ctx)
                    .await
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().is_err());
    }

    let got: BTreeSet<String> = collector.finalize().unwrap().messages().into_iter().collect();
    let want: BTreeSet<String> = (0..10).map(|i| i.to_string()).collect();
    assert_eq!(got, want);
}

/// Resolves once with the stored result, then reports itself terminated.
struct Once(Option<Result<u8, String>>);

impl Future for Once {
    type Output = Result<u8, String>;

    fn poll(mut self: Pin<&mut Self>, _: &mut TaskContext<'_>) -> Poll<Self::Output> {
        Poll::Ready(self.0.take().expect("polled after completion"))
    }
}

impl FusedFuture for Once {
    fn is_terminated(&self) -> bool {
        self.0.is_none()
    }
}

#[tokio::test]
async fn report_future_is_terminated_after_completion() {
    let (collector, ctx) = collector_context();

    let mut fut = ReportFuture::new(Once(Some(Err("late".into()))), ctx);
    assert!(!fut.is_terminated());

    assert!((&mut fut).await.is_err());
    assert!(fut.is_terminated());
    assert_eq!(collector.finalize().unwrap().messages(), ["late"]);
}

#[tokio::test]
async fn report_in_without_collector_still_terminates() {
    let mut fut = Once(Some(Ok(7))).report_in(&Context::background());
    assert!(!fut.is_terminated());

    assert_eq!((&mut fut).await.unwrap(), 7);
    assert!(fut.is_terminated());
}
