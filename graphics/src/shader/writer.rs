//! Line-oriented GLSL source writer shared by the shader generators.

use super::ShaderConfig;
use super::types::InterpolationQualifier;

const INDENT: &str = "    ";

/// Builds one shader stage line by line.
///
/// Every stage starts with the configured version directive. Declarations are
/// grouped into sections separated by a single blank line, followed by the
/// `main` entry point.
pub(crate) struct ShaderWriter {
    source: String,
    depth: usize,
}

impl ShaderWriter {
    /// Start a new stage with the configured version directive.
    pub fn new(config: &ShaderConfig) -> Self {
        let mut writer = Self {
            source: String::with_capacity(512),
            depth: 0,
        };
        writer.line(&config.version_directive);
        writer.section();
        writer
    }

    /// Write a single line at the current indentation.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.source.push_str(INDENT);
        }
        self.source.push_str(text);
        self.source.push('\n');
    }

    /// End the current declaration section.
    ///
    /// Consecutive calls, or a call on an empty section, emit nothing extra.
    pub fn section(&mut self) {
        if !self.source.ends_with("\n\n") {
            self.source.push('\n');
        }
    }

    /// Declare a stage input.
    pub fn input(&mut self, qualifier: InterpolationQualifier, ty: &str, name: &str) {
        self.line(&format!("{}in {ty} {name};", qualifier.prefix()));
    }

    /// Declare a stage output.
    pub fn output(&mut self, qualifier: InterpolationQualifier, ty: &str, name: &str) {
        self.line(&format!("{}out {ty} {name};", qualifier.prefix()));
    }

    /// Declare a uniform.
    pub fn uniform(&mut self, ty: &str, name: &str) {
        self.line(&format!("uniform {ty} {name};"));
    }

    /// Write `header` followed by an opening brace and indent.
    pub fn open(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    /// Dedent and write a closing brace.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Increase indentation without writing a brace (used for `case` bodies).
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease indentation without writing a brace.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Finish the stage and return its source.
    pub fn finish(self) -> String {
        self.source
    }
}
