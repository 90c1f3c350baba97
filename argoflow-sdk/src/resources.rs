//! Resource-request classification

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::values::value_kind;

/// Resource key that marks a GPU request, after key normalization.
const GPU_KEY: &str = "gpu";

/// Whether a resource request asks for a GPU.
///
/// Keys are matched after trimming surrounding whitespace and ASCII case
/// folding, so `"GPU"` and `" gpu "` both count; `cpu`, `memory`, and any
/// other keys never affect the outcome. An absent request or YAML null
/// means no GPU. Anything other than a mapping is a caller bug and fails
/// with [`Error::ResourceSpecType`].
pub fn gpu_requested(resources: Option<&Value>) -> Result<bool> {
    let spec = match resources {
        None | Some(Value::Null) => return Ok(false),
        Some(Value::Mapping(entries)) => entries,
        Some(other) => {
            return Err(Error::ResourceSpecType {
                found: value_kind(other),
            })
        }
    };

    Ok(spec.keys().any(|key| match key {
        Value::String(name) => name.trim().eq_ignore_ascii_case(GPU_KEY),
        _ => false,
    }))
}
