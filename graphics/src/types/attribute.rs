//! Vertex attribute descriptors.
//!
//! An [`AttributeDescriptor`] names a per-vertex shader input and describes its
//! element type. Descriptors are combined into ordered lists that drive shader
//! generation; by convention the position attribute comes first.
//!
//! # Example
//!
//! ```ignore
//! let attributes = [
//!     AttributeDescriptor::float("position", 3),
//!     AttributeDescriptor::float("normal", 3).normalized().remapped_to_unit_range(),
//!     AttributeDescriptor::new("boneIndices", 4, ElementKind::Int),
//! ];
//! ```

use std::fmt;

/// Scalar element type of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit float.
    Float,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UnsignedInt,
}

impl ElementKind {
    /// Size in bytes of a single component.
    pub fn size_in_bytes(&self) -> u32 {
        match self {
            Self::Float | Self::Int | Self::UnsignedInt => 4,
        }
    }

    /// Whether this kind holds integer data.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int | Self::UnsignedInt)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
            Self::Int => write!(f, "signed int"),
            Self::UnsignedInt => write!(f, "unsigned int"),
        }
    }
}

/// A named, typed per-vertex input.
///
/// The name is used both as the vertex stage input and as the base of the
/// varying passed on to the fragment stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    /// Shader input name.
    pub name: String,
    /// Number of components (1-4).
    pub component_count: u32,
    /// Element type of each component.
    pub element_kind: ElementKind,
    /// Wrap the value in `normalize()` before passing it on.
    pub normalize: bool,
    /// Apply `* 0.5 + 0.5` to map signed data into `[0, 1]`.
    pub remap_to_unit_range: bool,
}

impl AttributeDescriptor {
    /// Create a new attribute descriptor with no value transforms.
    pub fn new(name: impl Into<String>, component_count: u32, element_kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            component_count,
            element_kind,
            normalize: false,
            remap_to_unit_range: false,
        }
    }

    /// Create a float attribute.
    pub fn float(name: impl Into<String>, component_count: u32) -> Self {
        Self::new(name, component_count, ElementKind::Float)
    }

    /// Enable unit-length normalization.
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// Enable the `* 0.5 + 0.5` remap.
    pub fn remapped_to_unit_range(mut self) -> Self {
        self.remap_to_unit_range = true;
        self
    }

    /// Size in bytes of one element of this attribute.
    pub fn size_in_bytes(&self) -> u32 {
        self.element_kind.size_in_bytes() * self.component_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_size() {
        assert_eq!(AttributeDescriptor::float("position", 3).size_in_bytes(), 12);
        assert_eq!(
            AttributeDescriptor::new("ids", 4, ElementKind::UnsignedInt).size_in_bytes(),
            16
        );
    }

    #[test]
    fn test_attribute_builders() {
        let normal = AttributeDescriptor::float("normal", 3)
            .normalized()
            .remapped_to_unit_range();
        assert!(normal.normalize);
        assert!(normal.remap_to_unit_range);

        let plain = AttributeDescriptor::float("uv", 2);
        assert!(!plain.normalize);
        assert!(!plain.remap_to_unit_range);
    }

    #[test]
    fn test_integer_kinds() {
        assert!(!ElementKind::Float.is_integer());
        assert!(ElementKind::Int.is_integer());
        assert!(ElementKind::UnsignedInt.is_integer());
    }
}
