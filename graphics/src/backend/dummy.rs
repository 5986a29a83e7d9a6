//! Dummy deleter for testing and development.
//!
//! This deleter doesn't call into GL but records every delete request, so the
//! lifetime tracking can be tested without a context.

use crate::resources::{ResourceHandle, ResourceKind};

use super::ResourceDeleter;

/// Deleter that records requests instead of deleting.
#[derive(Debug, Default, Clone)]
pub struct DummyDeleter {
    deleted: Vec<ResourceHandle>,
}

impl DummyDeleter {
    /// Create a new dummy deleter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the deleter name.
    pub fn name(&self) -> &'static str {
        "Dummy"
    }

    /// Handles deleted so far, in call order.
    pub fn deleted(&self) -> &[ResourceHandle] {
        &self.deleted
    }

    /// Number of objects of `kind` deleted so far.
    pub fn deleted_count(&self, kind: ResourceKind) -> usize {
        self.deleted.iter().filter(|h| h.kind() == kind).count()
    }

    fn record(&mut self, kind: ResourceKind, id: u32) {
        log::trace!("DummyDeleter: deleting {:?} {}", kind, id);
        self.deleted.push(ResourceHandle::new(kind, id));
    }
}

impl ResourceDeleter for DummyDeleter {
    fn delete_buffer(&mut self, id: u32) {
        self.record(ResourceKind::Buffer, id);
    }

    fn delete_program(&mut self, id: u32) {
        self.record(ResourceKind::Program, id);
    }

    fn delete_vertex_array(&mut self, id: u32) {
        self.record(ResourceKind::VertexArray, id);
    }

    fn delete_framebuffer(&mut self, id: u32) {
        self.record(ResourceKind::Framebuffer, id);
    }

    fn delete_renderbuffer(&mut self, id: u32) {
        self.record(ResourceKind::Renderbuffer, id);
    }

    fn delete_texture(&mut self, id: u32) {
        self.record(ResourceKind::Texture, id);
    }

    fn delete_sampler(&mut self, id: u32) {
        self.record(ResourceKind::Sampler, id);
    }
}
