//! Lets code that only holds a [`Context`] report errors into an ancestor's
//! [`Collector`].
//!
//! The owner attaches its collector with [`Collector::new_context`] and hands
//! the context down. Workers record their terminal error in an [`ErrorSlot`]
//! and arm a [`DeferredReport`] guard; when the guard drops, on any exit path,
//! it reads the slot and registers whatever is in it.
//!
//! Every step is a silent no-op when there is nothing to do: no slot, an
//! empty slot, or a context without a collector. Reporting is therefore safe
//! to arm unconditionally.
//!
//! Prefer passing `&Collector` directly (see
//! [`ResultExt::report_to`](crate::traits::ResultExt::report_to)) where the
//! call depth allows it.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use error_fanin::{defer_report, Collector, Context};
//!
//! fn step(ctx: &Context, fail: bool) -> Result<(), String> {
//!     defer_report!(ctx => slot);
//!     if fail {
//!         return slot.fail(String::from("step failed"));
//!     }
//!     Ok(())
//! }
//!
//! let collector = Arc::new(Collector::new());
//! let ctx = collector.new_context(&Context::background());
//!
//! let _ = step(&ctx, false);
//! let _ = step(&ctx, true);
//!
//! assert_eq!(collector.finalize().unwrap().messages(), ["step failed"]);
//! ```

use crate::context::Context;
use crate::types::{share, BoxError, Collector, SharedError};
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

/// Private key type: only this module can attach or find a collector.
struct CollectorKey;

impl Collector {
    /// Derives a child of `parent` that carries this collector.
    pub fn new_context(self: &Arc<Self>, parent: &Context) -> Context {
        parent.with_value::<CollectorKey, _>(Arc::clone(self))
    }
}

/// Returns the collector attached to `ctx` or one of its ancestors.
pub fn collector_from(ctx: &Context) -> Option<&Arc<Collector>> {
    ctx.value::<CollectorKey, Arc<Collector>>()
}

/// Registers the error currently held by `slot` into the collector of `ctx`.
///
/// Does nothing when `slot` is `None`, when the slot is empty, or when no
/// collector is attached to `ctx`.
pub fn add_to_context(ctx: &Context, slot: Option<&ErrorSlot>) {
    let Some(error) = slot.and_then(ErrorSlot::get) else {
        return;
    };

    match collector_from(ctx) {
        Some(collector) => {
            collector.register_shared(error);
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %error, "no collector in context, error not reported");
        }
    }
}

/// Late-bound holder for the terminal error of a unit of work.
///
/// The slot is read when its [`DeferredReport`] drops, not when the guard is
/// armed, so assignments made right before returning are observed.
#[derive(Default)]
pub struct ErrorSlot {
    error: RefCell<Option<SharedError>>,
}

impl ErrorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `error`, replacing any previous one.
    pub fn set<E>(&self, error: E)
    where
        E: Into<BoxError>,
    {
        self.set_shared(share(error));
    }

    pub fn set_shared(&self, error: SharedError) {
        *self.error.borrow_mut() = Some(error);
    }

    /// Empties the slot.
    pub fn clear(&self) {
        self.error.borrow_mut().take();
    }

    /// Current content of the slot.
    pub fn get(&self) -> Option<SharedError> {
        self.error.borrow().clone()
    }

    pub fn is_set(&self) -> bool {
        self.error.borrow().is_some()
    }

    /// Stores the error of a failed `result`; returns the success value, if any.
    pub fn capture<T, E>(&self, result: Result<T, E>) -> Option<T>
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.set(error);
                None
            }
        }
    }

    /// Stores a clone of `error` and returns it as `Err`, for `return slot.fail(e)`.
    pub fn fail<T, E>(&self, error: E) -> Result<T, E>
    where
        E: Clone + Into<BoxError>,
    {
        self.set(error.clone());
        Err(error)
    }

    /// Arms a guard that reports this slot into `ctx` when dropped.
    pub fn report_to<'a>(&'a self, ctx: &'a Context) -> DeferredReport<'a> {
        DeferredReport { ctx, slot: self }
    }
}

impl fmt::Debug for ErrorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorSlot").field("error", &self.get()).finish()
    }
}

/// Scope guard created by [`ErrorSlot::report_to`].
///
/// Runs [`add_to_context`] on drop: on normal return, on early return through
/// `?`, and while unwinding from a panic.
#[must_use = "the report runs when the guard is dropped"]
pub struct DeferredReport<'a> {
    ctx: &'a Context,
    slot: &'a ErrorSlot,
}

impl Drop for DeferredReport<'_> {
    fn drop(&mut self) {
        add_to_context(self.ctx, Some(self.slot));
    }
}

impl fmt::Debug for DeferredReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredReport")
            .field("ctx", self.ctx)
            .field("slot", self.slot)
            .finish()
    }
}

/// Runs `work` and reports its error into `ctx` once it has returned.
///
/// The caller still receives the error, shared with the collector.
///
/// ```
/// use std::sync::Arc;
/// use error_fanin::{report_scope, Collector, Context};
///
/// let collector = Arc::new(Collector::new());
/// let ctx = collector.new_context(&Context::background());
///
/// let err = report_scope(&ctx, || "nope".parse::<u32>()).unwrap_err();
/// let reported = collector.finalize().unwrap();
/// assert!(Arc::ptr_eq(&err, &reported.errors()[0]));
/// ```
pub fn report_scope<T, E, F>(ctx: &Context, work: F) -> Result<T, SharedError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    let slot = ErrorSlot::new();
    let _report = slot.report_to(ctx);
    match work() {
        Ok(value) => Ok(value),
        Err(error) => {
            let error = share(error);
            slot.set_shared(Arc::clone(&error));
            Err(error)
        }
    }
}
