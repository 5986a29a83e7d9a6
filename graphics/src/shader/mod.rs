//! Declarative GLSL shader generation.
//!
//! This module generates vertex and fragment shader source from ordered lists
//! of attribute and texture descriptors.
//!
//! # Overview
//!
//! The shader system consists of:
//! - [`glsl_type_name`] / [`InterpolationQualifier`] - GLSL naming for attribute types
//! - [`construct_vector`] - Resizing one vector expression into another
//! - [`generate_attribute_shader`] - Debug shader visualizing one attribute at a time
//! - [`generate_texture_shader`] - Shader combining a list of texture samples
//! - [`ShaderCache`] - Memoized attribute shaders
//!
//! Generation is deterministic: the same descriptor list (including order)
//! always produces byte-identical source text.
//!
//! # Example
//!
//! ```ignore
//! use redlilium_gl::shader::generate_attribute_shader;
//! use redlilium_gl::types::AttributeDescriptor;
//!
//! let source = generate_attribute_shader(&[
//!     AttributeDescriptor::float("position", 3),
//!     AttributeDescriptor::float("normal", 3).normalized().remapped_to_unit_range(),
//! ])?;
//!
//! gpu.compile_program(&source.vertex, &source.fragment)?;
//! ```

mod attribute_shader;
mod cache;
mod texture_shader;
mod types;
mod vector;
mod writer;

pub use attribute_shader::{generate_attribute_shader, generate_attribute_shader_with_config};
pub use cache::ShaderCache;
pub use texture_shader::{
    SurfaceAttributes, generate_texture_shader, generate_texture_shader_with_config,
};
pub use types::{InterpolationQualifier, glsl_type_name};
pub use vector::construct_vector;

/// Shader pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader.
    Vertex,
    /// Fragment shader.
    Fragment,
}

/// Generated source text for a vertex + fragment program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedShaderSource {
    /// Vertex stage source.
    pub vertex: String,
    /// Fragment stage source.
    pub fragment: String,
}

impl GeneratedShaderSource {
    /// Get the source for a stage.
    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

/// Names and directives used in generated shaders.
///
/// All fields can be overridden to match an existing renderer's conventions.
///
/// # Example
///
/// ```ignore
/// let config = ShaderConfig::default()
///     .with_version_directive("#version 450 core")
///     .with_mvp_uniform("u_mvp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderConfig {
    /// First line of every generated stage.
    pub version_directive: String,
    /// `mat4` uniform transforming positions into clip space.
    pub mvp_uniform: String,
    /// `mat4` uniform used to compute view-space normals for sphere mapping.
    pub view_uniform: String,
    /// `int` uniform selecting the attribute to visualize.
    pub attribute_index_uniform: String,
    /// Fragment color output.
    pub color_output: String,
    /// Suffix appended to an attribute name to form its varying.
    pub varying_suffix: String,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            version_directive: "#version 330".to_string(),
            mvp_uniform: "mvpMatrix".to_string(),
            view_uniform: "viewMatrix".to_string(),
            attribute_index_uniform: "attributeIndex".to_string(),
            color_output: "fragColor".to_string(),
            varying_suffix: "_vs".to_string(),
        }
    }
}

impl ShaderConfig {
    /// Set the version directive (e.g. `#version 300 es`).
    pub fn with_version_directive(mut self, directive: impl Into<String>) -> Self {
        self.version_directive = directive.into();
        self
    }

    /// Set the clip-space transform uniform name.
    pub fn with_mvp_uniform(mut self, name: impl Into<String>) -> Self {
        self.mvp_uniform = name.into();
        self
    }

    /// Set the view matrix uniform name.
    pub fn with_view_uniform(mut self, name: impl Into<String>) -> Self {
        self.view_uniform = name.into();
        self
    }

    /// Set the attribute selector uniform name.
    pub fn with_attribute_index_uniform(mut self, name: impl Into<String>) -> Self {
        self.attribute_index_uniform = name.into();
        self
    }

    /// Set the fragment color output name.
    pub fn with_color_output(mut self, name: impl Into<String>) -> Self {
        self.color_output = name.into();
        self
    }

    /// Set the varying name suffix.
    pub fn with_varying_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.varying_suffix = suffix.into();
        self
    }

    /// Varying name for an attribute.
    pub fn varying_name(&self, attribute: &str) -> String {
        format!("{attribute}{}", self.varying_suffix)
    }
}
