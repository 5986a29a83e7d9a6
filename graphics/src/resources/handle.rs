//! Native GL object identities.

use std::fmt;

/// Kind of native GL object.
///
/// Each kind is destroyed by exactly one native delete call; see
/// [`ResourceDeleter`](crate::backend::ResourceDeleter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Buffer object (`glDeleteBuffers`).
    Buffer,
    /// Linked program (`glDeleteProgram`).
    Program,
    /// Vertex array object (`glDeleteVertexArrays`).
    VertexArray,
    /// Framebuffer object (`glDeleteFramebuffers`).
    Framebuffer,
    /// Renderbuffer object (`glDeleteRenderbuffers`).
    Renderbuffer,
    /// Texture object (`glDeleteTextures`).
    Texture,
    /// Sampler object (`glDeleteSamplers`).
    Sampler,
}

impl ResourceKind {
    /// All kinds, in declaration order.
    pub const ALL: [ResourceKind; 7] = [
        Self::Buffer,
        Self::Program,
        Self::VertexArray,
        Self::Framebuffer,
        Self::Renderbuffer,
        Self::Texture,
        Self::Sampler,
    ];
}

/// Identity of a native GL object.
///
/// Drivers recycle ids after deletion and different kinds may share the same
/// numeric id, so the kind is part of the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceHandle {
    kind: ResourceKind,
    id: u32,
}

impl ResourceHandle {
    /// Create a handle for a native object.
    pub fn new(kind: ResourceKind, id: u32) -> Self {
        Self { kind, id }
    }

    /// Create a buffer handle.
    pub fn buffer(id: u32) -> Self {
        Self::new(ResourceKind::Buffer, id)
    }

    /// Create a texture handle.
    pub fn texture(id: u32) -> Self {
        Self::new(ResourceKind::Texture, id)
    }

    /// Create a program handle.
    pub fn program(id: u32) -> Self {
        Self::new(ResourceKind::Program, id)
    }

    /// Get the object kind.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Get the native id.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.kind, self.id)
    }
}
