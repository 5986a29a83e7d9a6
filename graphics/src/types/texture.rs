//! Texture binding descriptors.

/// Where a texture lookup takes its coordinates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UvSource {
    /// The primary UV attribute, passed through unchanged.
    #[default]
    Plane,
    /// Sphere environment mapping derived from the view-space normal.
    SphereMap,
    /// Cube map lookup using a 3-component direction.
    CubeMap,
}

impl UvSource {
    /// GLSL sampler type for textures sampled with this source.
    pub fn sampler_type(&self) -> &'static str {
        match self {
            Self::Plane | Self::SphereMap => "sampler2D",
            Self::CubeMap => "samplerCube",
        }
    }
}

/// Channel selection applied to a texture sample.
///
/// Every swizzle selects three components so samples can be combined into a
/// single RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelSwizzle {
    /// Color channels as-is.
    #[default]
    Rgb,
    /// Red channel broadcast to RGB.
    R,
    /// Green channel broadcast to RGB.
    G,
    /// Blue channel broadcast to RGB.
    B,
    /// Alpha channel broadcast to RGB.
    A,
}

impl ChannelSwizzle {
    /// Component selection string, without the leading dot.
    pub fn components(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::R => "rrr",
            Self::G => "ggg",
            Self::B => "bbb",
            Self::A => "aaa",
        }
    }
}

/// A texture uniform and how it is sampled.
///
/// The position of a descriptor in its list determines the order in which
/// samples are combined in the generated fragment shader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureBindingDescriptor {
    /// Name of the sampler uniform.
    pub uniform_name: String,
    /// Coordinate source.
    pub uv_source: UvSource,
    /// Channel selection.
    pub channel_swizzle: ChannelSwizzle,
}

impl TextureBindingDescriptor {
    /// Create a new texture binding.
    pub fn new(
        uniform_name: impl Into<String>,
        uv_source: UvSource,
        channel_swizzle: ChannelSwizzle,
    ) -> Self {
        Self {
            uniform_name: uniform_name.into(),
            uv_source,
            channel_swizzle,
        }
    }

    /// Create a plane-mapped RGB binding.
    pub fn plane(uniform_name: impl Into<String>) -> Self {
        Self::new(uniform_name, UvSource::Plane, ChannelSwizzle::Rgb)
    }

    /// Set the channel swizzle.
    pub fn with_swizzle(mut self, channel_swizzle: ChannelSwizzle) -> Self {
        self.channel_swizzle = channel_swizzle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swizzle_components() {
        assert_eq!(ChannelSwizzle::Rgb.components(), "rgb");
        assert_eq!(ChannelSwizzle::R.components(), "rrr");
        assert_eq!(ChannelSwizzle::A.components(), "aaa");
    }

    #[test]
    fn test_sampler_types() {
        assert_eq!(UvSource::Plane.sampler_type(), "sampler2D");
        assert_eq!(UvSource::SphereMap.sampler_type(), "sampler2D");
        assert_eq!(UvSource::CubeMap.sampler_type(), "samplerCube");
    }

    #[test]
    fn test_plane_binding() {
        let binding = TextureBindingDescriptor::plane("colorMap").with_swizzle(ChannelSwizzle::G);
        assert_eq!(binding.uniform_name, "colorMap");
        assert_eq!(binding.uv_source, UvSource::Plane);
        assert_eq!(binding.channel_swizzle, ChannelSwizzle::G);
    }
}
