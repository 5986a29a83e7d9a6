//! Memoization of generated attribute shaders.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::types::AttributeDescriptor;

use super::attribute_shader::generate_attribute_shader_with_config;
use super::{GeneratedShaderSource, ShaderConfig};

type CacheKey = (Vec<AttributeDescriptor>, ShaderConfig);

/// Thread-safe cache of attribute visualization shaders.
///
/// Generation is deterministic, so a cached result is always identical to
/// what a fresh call would produce. Errors are not cached.
///
/// # Example
///
/// ```ignore
/// let cache = ShaderCache::new();
/// let source = cache.attribute_shader(&mesh_attributes, &ShaderConfig::default())?;
/// ```
#[derive(Default)]
pub struct ShaderCache {
    entries: Mutex<HashMap<CacheKey, Arc<GeneratedShaderSource>>>,
}

impl ShaderCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the attribute shader for `attributes`, generating it on first use.
    pub fn attribute_shader(
        &self,
        attributes: &[AttributeDescriptor],
        config: &ShaderConfig,
    ) -> Result<Arc<GeneratedShaderSource>> {
        let key = (attributes.to_vec(), config.clone());
        if let Some(source) = self.entries.lock().get(&key) {
            return Ok(Arc::clone(source));
        }

        // Generate outside the lock; a racing thread produces identical text.
        let source = Arc::new(generate_attribute_shader_with_config(attributes, config)?);
        let mut entries = self.entries.lock();
        Ok(Arc::clone(entries.entry(key).or_insert(source)))
    }

    /// Number of cached programs.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop all cached programs.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl std::fmt::Debug for ShaderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderCache")
            .field("entries", &self.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(ShaderCache: Send, Sync);
