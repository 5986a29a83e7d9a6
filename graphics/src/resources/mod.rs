//! Native GL object lifetime tracking.
//!
//! This module contains:
//! - [`ResourceKind`] / [`ResourceHandle`] - Identity of a native object
//! - [`ReferenceTable`] - Per-object reference counts with deferred deletion
//! - [`GlObject`] - Owned wrapper that registers on creation and releases on drop
//!
//! Releasing happens wherever a wrapper is dropped; the actual delete only
//! happens in [`ReferenceTable::sweep`], called on the thread that owns the GL
//! context.

mod handle;
mod object;
mod table;

pub use handle::{ResourceHandle, ResourceKind};
pub use object::GlObject;
pub use table::ReferenceTable;
