//! # RedLilium GL
//!
//! OpenGL support layer for RedLilium: shader generation, attribute binding
//! validation and native object lifetime tracking.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`shader`] - Declarative GLSL generation from attribute and texture descriptors
//! - [`binding`] - Range checks for vertex attribute bindings
//! - [`ReferenceTable`] / [`GlObject`] - Reference counted native objects with deferred deletion
//! - [`GlContext`] - Ties the reference table to the thread owning the GL context
//!
//! ## Example
//!
//! ```ignore
//! use redlilium_gl::{AttributeDescriptor, DummyDeleter, GlContext, ResourceKind};
//! use redlilium_gl::shader::generate_attribute_shader;
//!
//! let source = generate_attribute_shader(&[
//!     AttributeDescriptor::float("position", 3),
//!     AttributeDescriptor::float("uv", 2),
//! ])?;
//!
//! let mut context = GlContext::new(DummyDeleter::new());
//! let program = context.track(ResourceKind::Program, gl.link(&source)?);
//! drop(program);
//! context.sweep();
//! ```

pub mod backend;
pub mod binding;
pub mod context;
pub mod error;
pub mod profiling;
pub mod resources;
pub mod shader;
pub mod types;

// Re-export main types for convenience
pub use backend::{DummyDeleter, ResourceDeleter};
pub use binding::{AttributeBinding, BindingRequest, OutOfRange, validate_binding};
pub use context::{BoxedDeleter, ContextStats, GlContext};
pub use error::{GlError, Result};
pub use resources::{GlObject, ReferenceTable, ResourceHandle, ResourceKind};
pub use shader::{
    GeneratedShaderSource, ShaderCache, ShaderConfig, ShaderStage, SurfaceAttributes,
    construct_vector, generate_attribute_shader, generate_texture_shader, glsl_type_name,
};
pub use types::{
    AttributeDescriptor, ChannelSwizzle, ElementKind, TextureBindingDescriptor, UvSource,
};

/// GL library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the GL support layer.
pub fn init() {
    log::info!("RedLilium GL v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_dummy_deleter() {
        let deleter = DummyDeleter::new();
        assert_eq!(deleter.name(), "Dummy");
    }

    #[test]
    fn test_empty_attribute_shader() {
        let source = generate_attribute_shader(&[]).unwrap();
        assert!(source.vertex.starts_with("#version 330"));
        assert!(source.fragment.contains("fragColor = vec4(result, 1);"));
    }
}
