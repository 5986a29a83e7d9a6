//! Common utilities for integration tests.

#![allow(dead_code)]

use redlilium_gl::{AttributeDescriptor, ElementKind, TextureBindingDescriptor};

/// Install the test logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A typical lit, textured mesh vertex format.
pub fn mesh_attributes() -> Vec<AttributeDescriptor> {
    vec![
        AttributeDescriptor::float("position", 3),
        AttributeDescriptor::float("normal", 3)
            .normalized()
            .remapped_to_unit_range(),
        AttributeDescriptor::float("uv", 2),
        AttributeDescriptor::new("boneIndex", 4, ElementKind::UnsignedInt),
    ]
}

/// A diffuse texture plus a sphere-mapped reflection.
pub fn material_textures() -> Vec<TextureBindingDescriptor> {
    vec![
        TextureBindingDescriptor::plane("diffuseMap"),
        TextureBindingDescriptor::new(
            "reflectionMap",
            redlilium_gl::UvSource::SphereMap,
            redlilium_gl::ChannelSwizzle::Rgb,
        ),
    ]
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
