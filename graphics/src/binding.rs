//! Vertex attribute binding validation.
//!
//! Before a vertex buffer is bound to an attribute, the region the attribute
//! will read has to lie entirely inside the buffer's storage. For `n` vertices
//! the attribute touches bytes up to
//!
//! ```text
//! offset + (n - 1) * stride + element_size
//! ```
//!
//! The final vertex only needs its own element, not a full stride, so a buffer
//! may end `stride - element_size` bytes before `offset + n * stride`.
//!
//! # Example
//!
//! ```ignore
//! let binding = AttributeBinding::new(&normal, "mesh_vertices", buffer_size)
//!     .with_offset(12)
//!     .with_stride(32)
//!     .with_vertex_count(vertex_count);
//! binding.validate()?;
//! gl.vertex_attrib_pointer(/* ... */);
//! ```

use thiserror::Error;

use crate::error::{GlError, Result};
use crate::types::AttributeDescriptor;

/// Parameters of a single attribute binding, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BindingRequest {
    /// Allocated size of the buffer.
    pub buffer_size_bytes: i64,
    /// Size of one attribute element.
    pub element_size_bytes: i64,
    /// Offset of the first element.
    pub offset_bytes: i64,
    /// Distance between consecutive elements.
    pub stride_bytes: i64,
    /// Number of vertices read.
    pub vertex_count: i64,
}

/// Reason a binding was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutOfRange {
    /// The vertex count is negative.
    #[error("negative vertex count {vertex_count}")]
    NegativeVertexCount {
        /// Requested vertex count.
        vertex_count: i64,
    },
    /// The element size is negative.
    #[error("negative element size {element_size}")]
    NegativeElementSize {
        /// Requested element size.
        element_size: i64,
    },
    /// The offset is negative.
    #[error("negative offset {offset}")]
    NegativeOffset {
        /// Requested offset.
        offset: i64,
    },
    /// The stride is negative.
    #[error("negative stride {stride}")]
    NegativeStride {
        /// Requested stride.
        stride: i64,
    },
    /// One element does not fit into a single stride step.
    #[error("stride {stride} is smaller than the element size {element_size}")]
    StrideTooSmall {
        /// Requested stride.
        stride: i64,
        /// Element size.
        element_size: i64,
    },
    /// The last element ends past the end of the buffer.
    #[error("reading {required} bytes exceeds the buffer size {buffer_size}")]
    ExceedsBuffer {
        /// Bytes the binding touches.
        required: i128,
        /// Buffer size.
        buffer_size: i64,
    },
}

/// Check that a binding stays inside its buffer.
///
/// A binding reading no vertices is always valid. Otherwise the vertex
/// count, element size, offset and stride must be non-negative, the stride
/// must hold at least one element, and the last element must end within the
/// buffer.
pub fn validate_binding(request: &BindingRequest) -> std::result::Result<(), OutOfRange> {
    if request.vertex_count == 0 {
        return Ok(());
    }
    if request.vertex_count < 0 {
        return Err(OutOfRange::NegativeVertexCount {
            vertex_count: request.vertex_count,
        });
    }
    if request.element_size_bytes < 0 {
        return Err(OutOfRange::NegativeElementSize {
            element_size: request.element_size_bytes,
        });
    }
    if request.offset_bytes < 0 {
        return Err(OutOfRange::NegativeOffset {
            offset: request.offset_bytes,
        });
    }
    if request.stride_bytes < 0 {
        return Err(OutOfRange::NegativeStride {
            stride: request.stride_bytes,
        });
    }
    if request.stride_bytes < request.element_size_bytes {
        return Err(OutOfRange::StrideTooSmall {
            stride: request.stride_bytes,
            element_size: request.element_size_bytes,
        });
    }

    // Widened so the largest i64 inputs cannot overflow.
    let required = i128::from(request.offset_bytes)
        + i128::from(request.vertex_count - 1) * i128::from(request.stride_bytes)
        + i128::from(request.element_size_bytes);

    if required > i128::from(request.buffer_size_bytes) {
        return Err(OutOfRange::ExceedsBuffer {
            required,
            buffer_size: request.buffer_size_bytes,
        });
    }

    Ok(())
}

/// An attribute bound to a buffer region.
///
/// Wraps [`validate_binding`] with the attribute and buffer names so a failure
/// can be reported as an actionable [`GlError::AttributeOutOfRange`]. The
/// element size is derived from the attribute descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding<'a> {
    attribute: &'a AttributeDescriptor,
    buffer: String,
    buffer_size_bytes: i64,
    offset_bytes: i64,
    stride_bytes: i64,
    vertex_count: i64,
}

impl<'a> AttributeBinding<'a> {
    /// Bind `attribute` to the start of a tightly packed buffer.
    pub fn new(
        attribute: &'a AttributeDescriptor,
        buffer: impl Into<String>,
        buffer_size_bytes: i64,
    ) -> Self {
        Self {
            attribute,
            buffer: buffer.into(),
            buffer_size_bytes,
            offset_bytes: 0,
            stride_bytes: i64::from(attribute.size_in_bytes()),
            vertex_count: 0,
        }
    }

    /// Set the offset of the first element.
    pub fn with_offset(mut self, offset_bytes: i64) -> Self {
        self.offset_bytes = offset_bytes;
        self
    }

    /// Set the stride between elements.
    pub fn with_stride(mut self, stride_bytes: i64) -> Self {
        self.stride_bytes = stride_bytes;
        self
    }

    /// Set the number of vertices read.
    pub fn with_vertex_count(mut self, vertex_count: i64) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// The raw validator input for this binding.
    pub fn request(&self) -> BindingRequest {
        BindingRequest {
            buffer_size_bytes: self.buffer_size_bytes,
            element_size_bytes: i64::from(self.attribute.size_in_bytes()),
            offset_bytes: self.offset_bytes,
            stride_bytes: self.stride_bytes,
            vertex_count: self.vertex_count,
        }
    }

    /// Validate the binding.
    pub fn validate(&self) -> Result<()> {
        validate_binding(&self.request()).map_err(|reason| GlError::AttributeOutOfRange {
            attribute: self.attribute.name.clone(),
            buffer: self.buffer.clone(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(buffer: i64, element: i64, offset: i64, stride: i64, count: i64) -> BindingRequest {
        BindingRequest {
            buffer_size_bytes: buffer,
            element_size_bytes: element,
            offset_bytes: offset,
            stride_bytes: stride,
            vertex_count: count,
        }
    }

    #[test]
    fn test_single_element_fits_exactly() {
        assert_eq!(validate_binding(&request(5, 5, 0, 5, 1)), Ok(()));
    }

    #[test]
    fn test_second_element_exceeds() {
        assert_eq!(
            validate_binding(&request(5, 5, 0, 5, 2)),
            Err(OutOfRange::ExceedsBuffer {
                required: 10,
                buffer_size: 5,
            })
        );
    }

    #[test]
    fn test_last_element_needs_only_its_footprint() {
        // 10 vertices of 4 bytes every 5 bytes end at 49, not 50.
        assert_eq!(validate_binding(&request(49, 4, 0, 5, 10)), Ok(()));
        assert!(validate_binding(&request(48, 4, 0, 5, 10)).is_err());
    }

    #[test]
    fn test_zero_vertices_always_valid() {
        assert_eq!(validate_binding(&request(0, 16, -4, -1, 0)), Ok(()));
        assert_eq!(validate_binding(&request(0, 16, 1000, 0, 0)), Ok(()));
    }

    #[test]
    fn test_negative_vertex_count_rejected() {
        assert_eq!(
            validate_binding(&request(0, 5, -1, -1, -3)),
            Err(OutOfRange::NegativeVertexCount { vertex_count: -3 })
        );
        // Would otherwise read 100 bytes at offset 50 of a 4-byte buffer.
        assert_eq!(
            validate_binding(&request(4, 100, 50, 100, -1)),
            Err(OutOfRange::NegativeVertexCount { vertex_count: -1 })
        );
    }

    #[test]
    fn test_negative_element_size_rejected() {
        assert_eq!(
            validate_binding(&request(0, -10, 0, 0, 1)),
            Err(OutOfRange::NegativeElementSize { element_size: -10 })
        );
    }

    #[test]
    fn test_negative_parameters() {
        assert_eq!(
            validate_binding(&request(1 << 20, 4, -1, 4, 1)),
            Err(OutOfRange::NegativeOffset { offset: -1 })
        );
        assert_eq!(
            validate_binding(&request(1 << 20, 4, 0, -4, 1)),
            Err(OutOfRange::NegativeStride { stride: -4 })
        );
    }

    #[test]
    fn test_stride_smaller_than_element() {
        // The final element alone would fit, the stride is still rejected.
        assert_eq!(
            validate_binding(&request(1024, 12, 0, 8, 2)),
            Err(OutOfRange::StrideTooSmall {
                stride: 8,
                element_size: 12,
            })
        );
    }

    #[test]
    fn test_offset_counts_toward_range() {
        assert_eq!(validate_binding(&request(32, 12, 20, 12, 1)), Ok(()));
        assert!(validate_binding(&request(32, 12, 21, 12, 1)).is_err());
    }

    #[test]
    fn test_huge_ranges_do_not_overflow() {
        assert_eq!(
            validate_binding(&request(i64::MAX, 4, 0, i64::MAX, 3)),
            Err(OutOfRange::ExceedsBuffer {
                required: 2 * i128::from(i64::MAX) + 4,
                buffer_size: i64::MAX,
            })
        );
    }

    #[test]
    fn test_attribute_binding_reports_context() {
        let normal = AttributeDescriptor::float("normal", 3);
        let binding = AttributeBinding::new(&normal, "mesh_vertices", 64)
            .with_offset(12)
            .with_stride(24)
            .with_vertex_count(3);

        assert_eq!(binding.request().element_size_bytes, 12);
        assert_eq!(
            binding.validate(),
            Err(GlError::AttributeOutOfRange {
                attribute: "normal".to_string(),
                buffer: "mesh_vertices".to_string(),
                reason: OutOfRange::ExceedsBuffer {
                    required: 72,
                    buffer_size: 64,
                },
            })
        );
        assert!(binding.with_vertex_count(2).validate().is_ok());
    }

    #[test]
    fn test_attribute_binding_defaults_to_packed_stride() {
        let uv = AttributeDescriptor::float("uv", 2);
        let binding = AttributeBinding::new(&uv, "uvs", 80).with_vertex_count(10);
        assert_eq!(binding.request().stride_bytes, 8);
        assert!(binding.validate().is_ok());
    }
}
