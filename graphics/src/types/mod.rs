//! Descriptor types for shader generation.
//!
//! This module contains the attribute and texture descriptors that callers
//! combine into ordered lists to describe a vertex format and its materials.

mod attribute;
mod texture;

pub use attribute::{AttributeDescriptor, ElementKind};
pub use texture::{ChannelSwizzle, TextureBindingDescriptor, UvSource};
