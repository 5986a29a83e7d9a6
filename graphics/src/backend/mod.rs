//! Native GL object deletion.
//!
//! The reference table decides *when* an object dies; a [`ResourceDeleter`]
//! performs the native delete call. Implementations wrap a live GL context
//! and must only be used on the thread that owns it.
//!
//! # Available Deleters
//!
//! - [`DummyDeleter`]: Records deletions without a GL context, for testing

pub mod dummy;

pub use dummy::DummyDeleter;

use crate::resources::{ResourceHandle, ResourceKind};

/// Native delete calls, one per object kind.
///
/// Each method corresponds to exactly one `glDelete*` entry point. A sweep
/// calls it at most once per object.
pub trait ResourceDeleter {
    /// `glDeleteBuffers`.
    fn delete_buffer(&mut self, id: u32);
    /// `glDeleteProgram`.
    fn delete_program(&mut self, id: u32);
    /// `glDeleteVertexArrays`.
    fn delete_vertex_array(&mut self, id: u32);
    /// `glDeleteFramebuffers`.
    fn delete_framebuffer(&mut self, id: u32);
    /// `glDeleteRenderbuffers`.
    fn delete_renderbuffer(&mut self, id: u32);
    /// `glDeleteTextures`.
    fn delete_texture(&mut self, id: u32);
    /// `glDeleteSamplers`.
    fn delete_sampler(&mut self, id: u32);

    /// Dispatch to the delete call matching the handle's kind.
    fn delete(&mut self, handle: ResourceHandle) {
        let id = handle.id();
        match handle.kind() {
            ResourceKind::Buffer => self.delete_buffer(id),
            ResourceKind::Program => self.delete_program(id),
            ResourceKind::VertexArray => self.delete_vertex_array(id),
            ResourceKind::Framebuffer => self.delete_framebuffer(id),
            ResourceKind::Renderbuffer => self.delete_renderbuffer(id),
            ResourceKind::Texture => self.delete_texture(id),
            ResourceKind::Sampler => self.delete_sampler(id),
        }
    }
}

impl<D: ResourceDeleter + ?Sized> ResourceDeleter for Box<D> {
    fn delete_buffer(&mut self, id: u32) {
        (**self).delete_buffer(id);
    }
    fn delete_program(&mut self, id: u32) {
        (**self).delete_program(id);
    }
    fn delete_vertex_array(&mut self, id: u32) {
        (**self).delete_vertex_array(id);
    }
    fn delete_framebuffer(&mut self, id: u32) {
        (**self).delete_framebuffer(id);
    }
    fn delete_renderbuffer(&mut self, id: u32) {
        (**self).delete_renderbuffer(id);
    }
    fn delete_texture(&mut self, id: u32) {
        (**self).delete_texture(id);
    }
    fn delete_sampler(&mut self, id: u32) {
        (**self).delete_sampler(id);
    }
}
