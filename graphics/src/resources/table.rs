//! Reference counts of native GL objects.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::backend::ResourceDeleter;
use crate::profiling::{profile_plot, profile_scope};

use super::ResourceHandle;

/// Counts live wrappers per native object and defers deletion to a sweep.
///
/// Wrappers call [`register`](Self::register) when created and
/// [`release`](Self::release) when dropped, from any thread. The thread that
/// owns the GL context periodically calls [`sweep`](Self::sweep), which
/// deletes every object whose count dropped to zero.
///
/// Every operation takes the table lock, so concurrent read-modify-writes on
/// a key are never lost. A sweep checks for zero and removes the entry under
/// one lock, then releases it before calling the deleter: a `register` racing
/// with it is either seen before the check (the object survives) or applied
/// after the removal (a fresh entry). The deleter may use the table.
///
/// # Thread Safety
///
/// `ReferenceTable` is `Send + Sync`. `sweep` must only be called on the
/// thread owning the GL context; this cannot be checked here.
#[derive(Default)]
pub struct ReferenceTable {
    counts: Mutex<HashMap<ResourceHandle, u32>>,
}

impl ReferenceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference to `handle`, returning the new count.
    pub fn register(&self, handle: ResourceHandle) -> u32 {
        let mut counts = self.counts.lock();
        let count = counts.entry(handle).or_insert(0);
        *count += 1;
        log::trace!("ReferenceTable: register {handle} -> {count}");
        *count
    }

    /// Remove a reference to `handle`, returning the new count.
    ///
    /// The count never drops below zero. Releasing a handle that is not in the
    /// table (for example one already swept) does nothing and returns `None`.
    pub fn release(&self, handle: ResourceHandle) -> Option<u32> {
        let mut counts = self.counts.lock();
        let count = counts.get_mut(&handle)?;
        *count = count.saturating_sub(1);
        log::trace!("ReferenceTable: release {handle} -> {count}");
        Some(*count)
    }

    /// Current reference count of `handle`, if it is tracked.
    pub fn count(&self, handle: ResourceHandle) -> Option<u32> {
        self.counts.lock().get(&handle).copied()
    }

    /// Number of tracked handles, including those pending deletion.
    pub fn len(&self) -> usize {
        self.counts.lock().len()
    }

    /// Check if no handles are tracked.
    pub fn is_empty(&self) -> bool {
        self.counts.lock().is_empty()
    }

    /// Number of handles that the next sweep would delete.
    pub fn pending_deletion(&self) -> usize {
        self.counts.lock().values().filter(|&&count| count == 0).count()
    }

    /// Delete every unreferenced object and stop tracking it.
    ///
    /// Returns the deleted handles ordered by kind, then id. Handles with a
    /// non-zero count are left untouched. Calling this with nothing to delete
    /// is a no-op.
    ///
    /// Must be called on the thread that owns the GL context.
    pub fn sweep<D: ResourceDeleter + ?Sized>(&self, deleter: &mut D) -> Vec<ResourceHandle> {
        profile_scope!("reference_table_sweep");

        let (mut unreferenced, remaining) = {
            let mut counts = self.counts.lock();
            let unreferenced: Vec<ResourceHandle> = counts
                .iter()
                .filter(|&(_, &count)| count == 0)
                .map(|(&handle, _)| handle)
                .collect();
            for handle in &unreferenced {
                counts.remove(handle);
            }
            (unreferenced, counts.len())
        };
        unreferenced.sort_unstable();

        for handle in &unreferenced {
            log::debug!("ReferenceTable: deleting {handle}");
            deleter.delete(*handle);
        }

        if !unreferenced.is_empty() {
            log::debug!(
                "ReferenceTable: swept {} objects, {} still tracked",
                unreferenced.len(),
                remaining
            );
        }
        profile_plot!("gl_objects_tracked", remaining);

        unreferenced
    }
}

impl std::fmt::Debug for ReferenceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceTable")
            .field("tracked", &self.len())
            .field("pending_deletion", &self.pending_deletion())
            .finish()
    }
}

static_assertions::assert_impl_all!(ReferenceTable: Send, Sync);
