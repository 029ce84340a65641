//! Scope-exit sugar for the context bridge.
//!
//! - [`macro@crate::defer_report`] - declares an [`ErrorSlot`](crate::ErrorSlot)
//!   and arms a [`DeferredReport`](crate::DeferredReport) for the rest of the
//!   enclosing scope.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use error_fanin::{defer_report, Collector, Context};
//!
//! fn load(ctx: &Context, name: &str) -> Option<String> {
//!     defer_report!(ctx => slot);
//!     slot.capture(std::fs::read_to_string(name))
//! }
//!
//! let collector = Arc::new(Collector::new());
//! let ctx = collector.new_context(&Context::background());
//! assert!(load(&ctx, "/definitely/not/here").is_none());
//! assert_eq!(collector.len(), 1);
//! ```

/// Declares an [`ErrorSlot`](crate::ErrorSlot) named by the caller and reports
/// it into the context's collector when the enclosing scope exits.
///
/// # Syntax
///
/// - `defer_report!(ctx => slot)` - binds a fresh slot to `slot`
/// - `defer_report!(ctx, slot)` - arms a guard for an existing slot
///
/// The guard is dropped before the slot, so whatever the slot holds at scope
/// exit is what gets reported, including on early return and unwinding.
#[macro_export]
macro_rules! defer_report {
    ($ctx:expr => $slot:ident) => {
        let $slot = $crate::ErrorSlot::new();
        $crate::defer_report!($ctx, $slot);
    };
    ($ctx:expr, $slot:expr) => {
        let _deferred_report = $crate::ErrorSlot::report_to(&$slot, &$ctx);
    };
}
