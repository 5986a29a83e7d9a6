//! Vector constructor expressions that resize one vector into another.

use crate::error::{GlError, Result};
use crate::types::ElementKind;

use super::types::glsl_type_name;

/// Swizzle letters in component order.
const AXES: [char; 4] = ['x', 'y', 'z', 'w'];

/// Literal used for components the source does not provide.
const PADDING: &str = "1";

/// Build a float vector expression of `target_count` components from `source`.
///
/// A scalar source is broadcast with a single-argument constructor
/// (`vec3(s)`). Otherwise the shared leading components are swizzled out of
/// the source and the remaining slots are filled with `1`:
///
/// ```ignore
/// assert_eq!(construct_vector("p", 3, 4)?, "vec4(p.xyz, 1)");
/// assert_eq!(construct_vector("c", 4, 3)?, "vec3(c.xyz)");
/// assert_eq!(construct_vector("s", 1, 3)?, "vec3(s)");
/// ```
pub fn construct_vector(source: &str, source_count: u32, target_count: u32) -> Result<String> {
    if !(1..=4).contains(&source_count) {
        return Err(GlError::UnsupportedAttributeType {
            kind: ElementKind::Float,
            component_count: source_count,
        });
    }
    let target_type = glsl_type_name(ElementKind::Float, target_count)?;

    if source_count == 1 {
        return Ok(format!("{target_type}({source})"));
    }

    let shared = source_count.min(target_count) as usize;
    let swizzle: String = AXES[..shared].iter().collect();

    let mut expression = format!("{target_type}({source}.{swizzle}");
    for _ in shared..target_count as usize {
        expression.push_str(", ");
        expression.push_str(PADDING);
    }
    expression.push(')');

    Ok(expression)
}
