//! GL context bookkeeping.
//!
//! The [`GlContext`] ties a [`ReferenceTable`] to the [`ResourceDeleter`] of
//! the thread that owns the native context. Wrappers created by
//! [`GlContext::track`] can travel to and be dropped on any thread; the
//! context thread calls [`GlContext::sweep`] once per frame to delete what is
//! no longer referenced.

use std::sync::Arc;

use crate::backend::ResourceDeleter;
use crate::resources::{GlObject, ReferenceTable, ResourceHandle, ResourceKind};

/// A type-erased deleter that can live inside a shared context.
pub type BoxedDeleter = Box<dyn ResourceDeleter + Send + Sync>;

/// Snapshot of the lifetime bookkeeping of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContextStats {
    /// Handles currently in the table.
    pub tracked: usize,
    /// Tracked handles with no remaining references.
    pub pending_deletion: usize,
    /// Objects deleted by all sweeps so far.
    pub deleted_total: u64,
}

/// Owner of native object lifetimes for one GL context.
///
/// # Thread Safety
///
/// The context is `Send + Sync` when its deleter is. [`track`](Self::track)
/// and the statistics may be used from any thread; [`sweep`](Self::sweep)
/// needs `&mut self` and must run on the thread owning the GL context.
///
/// # Example
///
/// ```ignore
/// let mut context = GlContext::new(DummyDeleter::new());
/// let buffer = context.track(ResourceKind::Buffer, 1);
/// std::thread::spawn(move || drop(buffer)).join().unwrap();
/// assert_eq!(context.sweep().len(), 1);
/// ```
pub struct GlContext<D: ResourceDeleter = BoxedDeleter> {
    table: Arc<ReferenceTable>,
    deleter: D,
    deleted_total: u64,
}

impl<D: ResourceDeleter> GlContext<D> {
    /// Create a context with a fresh reference table.
    pub fn new(deleter: D) -> Self {
        Self::with_table(Arc::new(ReferenceTable::new()), deleter)
    }

    /// Create a context over an existing reference table.
    pub fn with_table(table: Arc<ReferenceTable>, deleter: D) -> Self {
        Self {
            table,
            deleter,
            deleted_total: 0,
        }
    }

    /// Get the reference table.
    pub fn table(&self) -> &Arc<ReferenceTable> {
        &self.table
    }

    /// Get the deleter.
    pub fn deleter(&self) -> &D {
        &self.deleter
    }

    /// Start tracking a freshly created native object.
    pub fn track(&self, kind: ResourceKind, id: u32) -> GlObject {
        let object = GlObject::new(Arc::clone(&self.table), ResourceHandle::new(kind, id));
        log::trace!("GlContext: tracking {}", object.handle());
        object
    }

    /// Delete every native object that is no longer referenced.
    ///
    /// Returns the deleted handles.
    pub fn sweep(&mut self) -> Vec<ResourceHandle> {
        let deleted = self.table.sweep(&mut self.deleter);
        self.deleted_total += deleted.len() as u64;
        deleted
    }

    /// Get the number of tracked objects that are still referenced.
    pub fn live_count(&self) -> usize {
        let stats = self.stats();
        stats.tracked.saturating_sub(stats.pending_deletion)
    }

    /// Get the number of objects the next sweep would delete.
    pub fn pending_count(&self) -> usize {
        self.table.pending_deletion()
    }

    /// Take a snapshot of the bookkeeping counters.
    pub fn stats(&self) -> ContextStats {
        ContextStats {
            tracked: self.table.len(),
            pending_deletion: self.table.pending_deletion(),
            deleted_total: self.deleted_total,
        }
    }
}

impl GlContext<BoxedDeleter> {
    /// Create a context with a type-erased deleter.
    pub fn boxed(deleter: impl ResourceDeleter + Send + Sync + 'static) -> Self {
        Self::new(Box::new(deleter))
    }
}

impl<D: ResourceDeleter> std::fmt::Debug for GlContext<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext")
            .field("table", &self.table)
            .field("deleted_total", &self.deleted_total)
            .finish()
    }
}

// Ensure GlContext is Send + Sync
static_assertions::assert_impl_all!(GlContext: Send, Sync);
static_assertions::assert_impl_all!(GlContext<crate::backend::DummyDeleter>: Send, Sync);
