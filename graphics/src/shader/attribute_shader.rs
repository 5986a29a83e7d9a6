//! Attribute visualization shader.
//!
//! Generates a program that passes every vertex attribute through to the
//! fragment stage and displays the one selected by an `int` uniform as a
//! color. Useful for inspecting normals, UVs, bone indices and other vertex
//! data of an arbitrary vertex format.

use std::collections::HashSet;

use crate::error::Result;
use crate::profiling::profile_scope;
use crate::types::AttributeDescriptor;

use super::types::{InterpolationQualifier, glsl_type_name};
use super::vector::construct_vector;
use super::writer::ShaderWriter;
use super::{GeneratedShaderSource, ShaderConfig};

/// Generate the attribute visualization shader with the default [`ShaderConfig`].
///
/// Attributes are declared in list order. When several attributes share a
/// name only the first is kept. The first attribute is used as the position.
///
/// # Errors
///
/// Returns [`GlError::UnsupportedAttributeType`] if any attribute has a
/// component count outside 1-4. No partial source is produced.
///
/// [`GlError::UnsupportedAttributeType`]: crate::GlError::UnsupportedAttributeType
pub fn generate_attribute_shader(
    attributes: &[AttributeDescriptor],
) -> Result<GeneratedShaderSource> {
    generate_attribute_shader_with_config(attributes, &ShaderConfig::default())
}

/// Generate the attribute visualization shader with an explicit config.
pub fn generate_attribute_shader_with_config(
    attributes: &[AttributeDescriptor],
    config: &ShaderConfig,
) -> Result<GeneratedShaderSource> {
    profile_scope!("generate_attribute_shader");

    let unique = unique_by_name(attributes);
    let source = GeneratedShaderSource {
        vertex: vertex_source(attributes.first(), &unique, config)?,
        fragment: fragment_source(&unique, config)?,
    };

    log::trace!(
        "generated attribute shader: {} attributes ({} unique), vertex={}B fragment={}B",
        attributes.len(),
        unique.len(),
        source.vertex.len(),
        source.fragment.len()
    );

    Ok(source)
}

/// Keep the first attribute for each name, preserving list order.
fn unique_by_name(attributes: &[AttributeDescriptor]) -> Vec<&AttributeDescriptor> {
    let mut seen = HashSet::new();
    attributes
        .iter()
        .filter(|attribute| seen.insert(attribute.name.as_str()))
        .collect()
}

/// Right-hand side of the varying assignment for an attribute.
fn varying_value(attribute: &AttributeDescriptor) -> String {
    let mut value = if attribute.normalize {
        format!("normalize({})", attribute.name)
    } else {
        attribute.name.clone()
    };
    if attribute.remap_to_unit_range {
        value.push_str(" * 0.5 + 0.5");
    }
    value
}

fn vertex_source(
    position: Option<&AttributeDescriptor>,
    attributes: &[&AttributeDescriptor],
    config: &ShaderConfig,
) -> Result<String> {
    let mut writer = ShaderWriter::new(config);

    for attribute in attributes {
        let ty = glsl_type_name(attribute.element_kind, attribute.component_count)?;
        writer.input(InterpolationQualifier::Smooth, &ty, &attribute.name);
    }
    writer.section();

    for attribute in attributes {
        let ty = glsl_type_name(attribute.element_kind, attribute.component_count)?;
        let qualifier = InterpolationQualifier::for_kind(attribute.element_kind);
        writer.output(qualifier, &ty, &config.varying_name(&attribute.name));
    }
    writer.section();

    writer.uniform("mat4", &config.mvp_uniform);
    writer.section();

    writer.open("void main()");
    for attribute in attributes {
        writer.line(&format!(
            "{} = {};",
            config.varying_name(&attribute.name),
            varying_value(attribute)
        ));
    }
    match position {
        Some(position) => {
            let expanded = construct_vector(&position.name, position.component_count, 4)?;
            writer.line(&format!(
                "gl_Position = {} * {expanded};",
                config.mvp_uniform
            ));
        }
        None => writer.line("gl_Position = vec4(0, 0, 0, 1);"),
    }
    writer.close();

    Ok(writer.finish())
}

fn fragment_source(attributes: &[&AttributeDescriptor], config: &ShaderConfig) -> Result<String> {
    let mut writer = ShaderWriter::new(config);

    for attribute in attributes {
        let ty = glsl_type_name(attribute.element_kind, attribute.component_count)?;
        let qualifier = InterpolationQualifier::for_kind(attribute.element_kind);
        writer.input(qualifier, &ty, &config.varying_name(&attribute.name));
    }
    writer.section();

    writer.uniform("int", &config.attribute_index_uniform);
    writer.section();

    writer.output(InterpolationQualifier::Smooth, "vec4", &config.color_output);
    writer.section();

    writer.open("void main()");
    writer.line("vec3 result = vec3(0);");
    if !attributes.is_empty() {
        writer.open(&format!("switch ({})", config.attribute_index_uniform));
        for (index, attribute) in attributes.iter().enumerate() {
            let varying = config.varying_name(&attribute.name);
            let color = construct_vector(&varying, attribute.component_count, 3)?;
            writer.line(&format!("case {index}:"));
            writer.indent();
            writer.line(&format!("result = {color};"));
            writer.line("break;");
            writer.dedent();
        }
        writer.close();
    }
    writer.line(&format!("{} = vec4(result, 1);", config.color_output));
    writer.close();

    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlError;
    use crate::types::ElementKind;

    #[test]
    fn test_vertex_stage() {
        let source = generate_attribute_shader(&[
            AttributeDescriptor::float("position", 3),
            AttributeDescriptor::float("normal", 3)
                .normalized()
                .remapped_to_unit_range(),
            AttributeDescriptor::new("bones", 4, ElementKind::UnsignedInt),
        ])
        .unwrap();

        assert_eq!(
            source.vertex,
            "#version 330\n\
             \n\
             in vec3 position;\n\
             in vec3 normal;\n\
             in uvec4 bones;\n\
             \n\
             out vec3 position_vs;\n\
             out vec3 normal_vs;\n\
             flat out uvec4 bones_vs;\n\
             \n\
             uniform mat4 mvpMatrix;\n\
             \n\
             void main()\n\
             {\n    \
             position_vs = position;\n    \
             normal_vs = normalize(normal) * 0.5 + 0.5;\n    \
             bones_vs = bones;\n    \
             gl_Position = mvpMatrix * vec4(position.xyz, 1);\n\
             }\n"
        );
    }

    #[test]
    fn test_fragment_stage() {
        let source = generate_attribute_shader(&[
            AttributeDescriptor::float("position", 3),
            AttributeDescriptor::new("id", 1, ElementKind::Int),
        ])
        .unwrap();

        assert_eq!(
            source.fragment,
            "#version 330\n\
             \n\
             in vec3 position_vs;\n\
             flat in int id_vs;\n\
             \n\
             uniform int attributeIndex;\n\
             \n\
             out vec4 fragColor;\n\
             \n\
             void main()\n\
             {\n    \
             vec3 result = vec3(0);\n    \
             switch (attributeIndex)\n    \
             {\n        \
             case 0:\n            \
             result = vec3(position_vs.xyz);\n            \
             break;\n        \
             case 1:\n            \
             result = vec3(id_vs);\n            \
             break;\n    \
             }\n    \
             fragColor = vec4(result, 1);\n\
             }\n"
        );
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let source = generate_attribute_shader(&[
            AttributeDescriptor::float("A", 1),
            AttributeDescriptor::new("A", 1, ElementKind::Int),
        ])
        .unwrap();

        assert_eq!(source.vertex.matches("in float A;").count(), 1);
        assert!(!source.vertex.contains("int A;"));
        assert_eq!(source.vertex.matches("out float A_vs;").count(), 1);
        assert_eq!(source.fragment.matches("in float A_vs;").count(), 1);
        assert!(!source.fragment.contains("case 1:"));
    }

    #[test]
    fn test_empty_attribute_list() {
        let source = generate_attribute_shader(&[]).unwrap();
        assert!(source.vertex.starts_with("#version 330\n"));
        assert!(source.vertex.contains("gl_Position = vec4(0, 0, 0, 1);"));
        assert!(source.fragment.starts_with("#version 330\n"));
        assert!(!source.fragment.contains("switch"));
        assert!(source.fragment.contains("fragColor = vec4(result, 1);"));
    }

    #[test]
    fn test_scalar_position_broadcast() {
        let source = generate_attribute_shader(&[AttributeDescriptor::float("height", 1)]).unwrap();
        assert!(source.vertex.contains("gl_Position = mvpMatrix * vec4(height);"));
        assert!(source.fragment.contains("result = vec3(height_vs);"));
    }

    #[test]
    fn test_unsupported_type_aborts() {
        let result = generate_attribute_shader(&[
            AttributeDescriptor::float("position", 3),
            AttributeDescriptor::float("broken", 7),
        ]);
        assert_eq!(
            result.unwrap_err(),
            GlError::UnsupportedAttributeType {
                kind: ElementKind::Float,
                component_count: 7,
            }
        );
    }

    #[test]
    fn test_custom_config() {
        let config = ShaderConfig::default()
            .with_version_directive("#version 300 es")
            .with_mvp_uniform("u_mvp")
            .with_attribute_index_uniform("u_index")
            .with_color_output("outColor");
        let source = generate_attribute_shader_with_config(
            &[AttributeDescriptor::float("position", 3)],
            &config,
        )
        .unwrap();

        assert!(source.vertex.starts_with("#version 300 es\n"));
        assert!(source.vertex.contains("gl_Position = u_mvp * vec4(position.xyz, 1);"));
        assert!(source.fragment.contains("switch (u_index)"));
        assert!(source.fragment.contains("outColor = vec4(result, 1);"));
    }
}
