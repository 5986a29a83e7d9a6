//! Texture sampling shader.
//!
//! Generates an unlit program that samples an ordered list of textures and
//! adds the selected channels of each sample into the output color.

use std::collections::HashMap;

use crate::error::{GlError, Result};
use crate::profiling::profile_scope;
use crate::types::{AttributeDescriptor, TextureBindingDescriptor, UvSource};

use super::types::{InterpolationQualifier, glsl_type_name};
use super::vector::construct_vector;
use super::writer::ShaderWriter;
use super::{GeneratedShaderSource, ShaderConfig};

/// Base name of the view-space normal varying used for sphere mapping.
const VIEW_NORMAL: &str = "viewNormal";

/// Local holding the sphere-mapped texture coordinate.
const SPHERE_UV: &str = "sphereUv";

/// Vertex attributes consumed by the texture shader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceAttributes {
    /// Position, transformed into clip space.
    pub position: AttributeDescriptor,
    /// Normal, used for sphere and cube map lookups.
    pub normal: AttributeDescriptor,
    /// Primary texture coordinate.
    pub uv: AttributeDescriptor,
}

impl Default for SurfaceAttributes {
    fn default() -> Self {
        Self {
            position: AttributeDescriptor::float("position", 3),
            normal: AttributeDescriptor::float("normal", 3),
            uv: AttributeDescriptor::float("uv", 2),
        }
    }
}

/// Generate the texture sampling shader with the default [`ShaderConfig`].
///
/// Textures are sampled in list order and their swizzled samples are summed.
/// A uniform bound several times is declared once. An empty list yields a
/// constant white surface.
///
/// # Errors
///
/// Returns [`GlError::UnsupportedAttributeType`] if a surface attribute has a
/// component count outside 1-4, and [`GlError::ConflictingSamplerType`] if
/// one uniform is bound both as a 2D texture and as a cube map.
///
/// [`GlError::UnsupportedAttributeType`]: crate::GlError::UnsupportedAttributeType
/// [`GlError::ConflictingSamplerType`]: crate::GlError::ConflictingSamplerType
pub fn generate_texture_shader(
    textures: &[TextureBindingDescriptor],
    surface: &SurfaceAttributes,
) -> Result<GeneratedShaderSource> {
    generate_texture_shader_with_config(textures, surface, &ShaderConfig::default())
}

/// Generate the texture sampling shader with an explicit config.
pub fn generate_texture_shader_with_config(
    textures: &[TextureBindingDescriptor],
    surface: &SurfaceAttributes,
    config: &ShaderConfig,
) -> Result<GeneratedShaderSource> {
    profile_scope!("generate_texture_shader");

    let sphere_mapped = textures
        .iter()
        .any(|texture| texture.uv_source == UvSource::SphereMap);

    let source = GeneratedShaderSource {
        vertex: vertex_source(surface, sphere_mapped, config)?,
        fragment: fragment_source(textures, surface, sphere_mapped, config)?,
    };

    log::trace!(
        "generated texture shader: {} textures, vertex={}B fragment={}B",
        textures.len(),
        source.vertex.len(),
        source.fragment.len()
    );

    Ok(source)
}

/// Varyings passed from the vertex to the fragment stage, in declaration order.
fn varyings<'a>(surface: &'a SurfaceAttributes) -> [&'a AttributeDescriptor; 2] {
    [&surface.normal, &surface.uv]
}

fn vertex_source(
    surface: &SurfaceAttributes,
    sphere_mapped: bool,
    config: &ShaderConfig,
) -> Result<String> {
    let mut writer = ShaderWriter::new(config);

    for attribute in [&surface.position, &surface.normal, &surface.uv] {
        let ty = glsl_type_name(attribute.element_kind, attribute.component_count)?;
        writer.input(InterpolationQualifier::Smooth, &ty, &attribute.name);
    }
    writer.section();

    for attribute in varyings(surface) {
        let ty = glsl_type_name(attribute.element_kind, attribute.component_count)?;
        let qualifier = InterpolationQualifier::for_kind(attribute.element_kind);
        writer.output(qualifier, &ty, &config.varying_name(&attribute.name));
    }
    if sphere_mapped {
        writer.output(
            InterpolationQualifier::Smooth,
            "vec3",
            &config.varying_name(VIEW_NORMAL),
        );
    }
    writer.section();

    writer.uniform("mat4", &config.mvp_uniform);
    if sphere_mapped {
        writer.uniform("mat4", &config.view_uniform);
    }
    writer.section();

    writer.open("void main()");
    for attribute in varyings(surface) {
        writer.line(&format!(
            "{} = {};",
            config.varying_name(&attribute.name),
            attribute.name
        ));
    }
    if sphere_mapped {
        let normal = construct_vector(&surface.normal.name, surface.normal.component_count, 3)?;
        writer.line(&format!(
            "{} = mat3({}) * {normal};",
            config.varying_name(VIEW_NORMAL),
            config.view_uniform
        ));
    }
    let position = construct_vector(
        &surface.position.name,
        surface.position.component_count,
        4,
    )?;
    writer.line(&format!("gl_Position = {} * {position};", config.mvp_uniform));
    writer.close();

    Ok(writer.finish())
}

fn fragment_source(
    textures: &[TextureBindingDescriptor],
    surface: &SurfaceAttributes,
    sphere_mapped: bool,
    config: &ShaderConfig,
) -> Result<String> {
    let mut writer = ShaderWriter::new(config);

    for attribute in varyings(surface) {
        let ty = glsl_type_name(attribute.element_kind, attribute.component_count)?;
        let qualifier = InterpolationQualifier::for_kind(attribute.element_kind);
        writer.input(qualifier, &ty, &config.varying_name(&attribute.name));
    }
    if sphere_mapped {
        writer.input(
            InterpolationQualifier::Smooth,
            "vec3",
            &config.varying_name(VIEW_NORMAL),
        );
    }
    writer.section();

    let mut declared: HashMap<&str, &'static str> = HashMap::new();
    for texture in textures {
        let sampler = texture.uv_source.sampler_type();
        match declared.get(texture.uniform_name.as_str()) {
            Some(&first) if first != sampler => {
                return Err(GlError::ConflictingSamplerType {
                    uniform: texture.uniform_name.clone(),
                    first,
                    second: sampler,
                });
            }
            Some(_) => {}
            None => {
                declared.insert(texture.uniform_name.as_str(), sampler);
                writer.uniform(sampler, &texture.uniform_name);
            }
        }
    }
    writer.section();

    writer.output(InterpolationQualifier::Smooth, "vec4", &config.color_output);
    writer.section();

    writer.open("void main()");
    if sphere_mapped {
        writer.line(&format!(
            "vec2 {SPHERE_UV} = normalize({}).xy * 0.5 + 0.5;",
            config.varying_name(VIEW_NORMAL)
        ));
    }
    if textures.is_empty() {
        writer.line("vec3 color = vec3(1);");
    } else {
        writer.line("vec3 color = vec3(0);");
    }
    for texture in textures {
        let coordinate = texture_coordinate(texture.uv_source, surface, config)?;
        writer.line(&format!(
            "color += texture({}, {coordinate}).{};",
            texture.uniform_name,
            texture.channel_swizzle.components()
        ));
    }
    writer.line(&format!("{} = vec4(color, 1);", config.color_output));
    writer.close();

    Ok(writer.finish())
}

/// Coordinate expression passed to `texture()` for a uv source.
fn texture_coordinate(
    uv_source: UvSource,
    surface: &SurfaceAttributes,
    config: &ShaderConfig,
) -> Result<String> {
    match uv_source {
        UvSource::Plane => {
            let uv = config.varying_name(&surface.uv.name);
            if surface.uv.component_count == 2 {
                Ok(uv)
            } else {
                construct_vector(&uv, surface.uv.component_count, 2)
            }
        }
        UvSource::SphereMap => Ok(SPHERE_UV.to_string()),
        UvSource::CubeMap => {
            let direction = config.varying_name(&surface.normal.name);
            if surface.normal.component_count == 3 {
                Ok(direction)
            } else {
                construct_vector(&direction, surface.normal.component_count, 3)
            }
        }
    }
}
