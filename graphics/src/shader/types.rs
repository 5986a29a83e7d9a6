//! GLSL type names and interpolation qualifiers for vertex attributes.

use crate::error::{GlError, Result};
use crate::types::ElementKind;

/// Get the GLSL type name for `component_count` elements of `kind`.
///
/// A single component maps to the scalar type (`float`, `int`, `uint`);
/// two to four components map to the matching vector type (`vec3`, `ivec2`,
/// `uvec4`, ...).
pub fn glsl_type_name(kind: ElementKind, component_count: u32) -> Result<String> {
    let (scalar, vector_prefix) = match kind {
        ElementKind::Float => ("float", "vec"),
        ElementKind::Int => ("int", "ivec"),
        ElementKind::UnsignedInt => ("uint", "uvec"),
    };

    match component_count {
        1 => Ok(scalar.to_string()),
        2..=4 => Ok(format!("{vector_prefix}{component_count}")),
        _ => Err(GlError::UnsupportedAttributeType {
            kind,
            component_count,
        }),
    }
}

/// Interpolation applied to a varying between the vertex and fragment stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationQualifier {
    /// Default perspective-correct interpolation (no keyword).
    Smooth,
    /// No interpolation; required for integer varyings.
    Flat,
}

impl InterpolationQualifier {
    /// Get the qualifier for a varying of the given element kind.
    pub fn for_kind(kind: ElementKind) -> Self {
        if kind.is_integer() {
            Self::Flat
        } else {
            Self::Smooth
        }
    }

    /// Declaration prefix, including a trailing space when non-empty.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Smooth => "",
            Self::Flat => "flat ",
        }
    }
}
