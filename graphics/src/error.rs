//! Error types.

use thiserror::Error;

use crate::binding::OutOfRange;
use crate::types::ElementKind;

/// Errors that can occur in shader generation and attribute binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// A descriptor requests a type the GLSL type mapper cannot name.
    #[error("unsupported attribute type: {component_count} x {kind}")]
    UnsupportedAttributeType {
        /// Requested element kind.
        kind: ElementKind,
        /// Requested component count.
        component_count: u32,
    },

    /// One texture uniform is sampled through incompatible sampler types.
    #[error("texture uniform \"{uniform}\" bound as both {first} and {second}")]
    ConflictingSamplerType {
        /// Uniform name.
        uniform: String,
        /// Sampler type of the first binding.
        first: &'static str,
        /// Conflicting sampler type of a later binding.
        second: &'static str,
    },

    /// An attribute binding would read outside its buffer.
    #[error("attribute \"{attribute}\" bound to buffer {buffer}: {reason}")]
    AttributeOutOfRange {
        /// Attribute name.
        attribute: String,
        /// Buffer label, or its native id when unlabeled.
        buffer: String,
        /// Which parameter was out of range.
        reason: OutOfRange,
    },
}

/// Alias for `Result<T, GlError>`.
pub type Result<T> = std::result::Result<T, GlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GlError::UnsupportedAttributeType {
            kind: ElementKind::UnsignedInt,
            component_count: 5,
        };
        assert_eq!(err.to_string(), "unsupported attribute type: 5 x unsigned int");

        let err = GlError::AttributeOutOfRange {
            attribute: "position".to_string(),
            buffer: "vertices".to_string(),
            reason: OutOfRange::NegativeOffset { offset: -4 },
        };
        assert_eq!(
            err.to_string(),
            "attribute \"position\" bound to buffer vertices: negative offset -4"
        );

        let err = GlError::ConflictingSamplerType {
            uniform: "env".to_string(),
            first: "sampler2D",
            second: "samplerCube",
        };
        assert_eq!(
            err.to_string(),
            "texture uniform \"env\" bound as both sampler2D and samplerCube"
        );
    }
}
