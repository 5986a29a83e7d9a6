//! Owned wrapper around a native GL object.

use std::sync::Arc;

use super::{ReferenceTable, ResourceHandle, ResourceKind};

/// A reference to a native GL object.
///
/// Creating or cloning a `GlObject` registers a reference in its
/// [`ReferenceTable`]; dropping it releases that reference. Dropping never
/// touches the GL API, so it is safe on any thread. The object is deleted by
/// the next [`ReferenceTable::sweep`] after the last reference is gone.
///
/// # Example
///
/// ```ignore
/// let texture = context.track(ResourceKind::Texture, gl.gen_texture());
/// let shared = texture.clone(); // count = 2
/// drop(texture);
/// drop(shared);                 // count = 0
/// context.sweep();              // glDeleteTextures
/// ```
pub struct GlObject {
    table: Arc<ReferenceTable>,
    handle: ResourceHandle,
}

impl GlObject {
    /// Wrap a native object, registering a reference in `table`.
    pub fn new(table: Arc<ReferenceTable>, handle: ResourceHandle) -> Self {
        table.register(handle);
        Self { table, handle }
    }

    /// Get the object identity.
    pub fn handle(&self) -> ResourceHandle {
        self.handle
    }

    /// Get the object kind.
    pub fn kind(&self) -> ResourceKind {
        self.handle.kind()
    }

    /// Get the native id.
    pub fn id(&self) -> u32 {
        self.handle.id()
    }

    /// Number of live references to this object.
    pub fn reference_count(&self) -> u32 {
        self.table.count(self.handle).unwrap_or(0)
    }
}

impl Clone for GlObject {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.table), self.handle)
    }
}

impl Drop for GlObject {
    fn drop(&mut self) {
        self.table.release(self.handle);
    }
}

impl std::fmt::Debug for GlObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlObject")
            .field("kind", &self.handle.kind())
            .field("id", &self.handle.id())
            .finish()
    }
}

// Ensure GlObject can be dropped from any thread
static_assertions::assert_impl_all!(GlObject: Send, Sync);
