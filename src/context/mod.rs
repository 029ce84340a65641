//! Immutable, parent-chained execution context.
//!
//! A [`Context`] is a cheap-to-clone handle to a chain of typed values.
//! Deriving a child never mutates the parent: [`Context::with_value`] returns
//! a new leaf that points back at its parent, and [`Context::value`] walks the
//! chain from the leaf upwards and returns the nearest match.
//!
//! Values are keyed by a type rather than a runtime value, so a module can
//! keep its entries private simply by keeping its key type private. This is
//! how the [`bridge`] attaches a [`Collector`](crate::Collector) that only the
//! bridge's own lookups can see.
//!
//! # Examples
//!
//! ```
//! use error_fanin::Context;
//!
//! struct RequestId;
//!
//! let root = Context::background();
//! let child = root.with_value::<RequestId, _>(42u64);
//!
//! assert_eq!(child.value::<RequestId, u64>(), Some(&42));
//! assert_eq!(root.value::<RequestId, u64>(), None);
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

pub mod bridge;

pub use bridge::{add_to_context, collector_from, report_scope, DeferredReport, ErrorSlot};

struct Node {
    parent: Option<Arc<Node>>,
    key: TypeId,
    value: Arc<dyn Any + Send + Sync>,
}

/// Handle to an immutable chain of typed values.
#[derive(Clone, Default)]
pub struct Context {
    leaf: Option<Arc<Node>>,
}

impl Context {
    /// The empty root context.
    #[inline]
    pub fn background() -> Self {
        Self::default()
    }

    /// Derives a child context carrying `value` under key type `K`.
    pub fn with_value<K, V>(&self, value: V) -> Self
    where
        K: 'static,
        V: Any + Send + Sync,
    {
        Self {
            leaf: Some(Arc::new(Node {
                parent: self.leaf.clone(),
                key: TypeId::of::<K>(),
                value: Arc::new(value),
            })),
        }
    }

    /// Looks up the nearest value stored under key type `K`.
    ///
    /// Returns `None` if no ancestor carries `K`, or if the nearest entry for
    /// `K` does not hold a `V`.
    pub fn value<K, V>(&self) -> Option<&V>
    where
        K: 'static,
        V: Any,
    {
        let key = TypeId::of::<K>();
        self.nodes()
            .find(|node| node.key == key)
            .and_then(|node| node.value.downcast_ref::<V>())
    }

    /// Number of values in the chain.
    pub fn depth(&self) -> usize {
        self.nodes().count()
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::successors(self.leaf.as_deref(), |node| node.parent.as_deref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("depth", &self.depth()).finish()
    }
}
