//! Base64 wrappers for script payloads

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;

/// Standard base64 of `input`, the form manifest fields embed.
pub fn encode_base64(input: &str) -> String {
    STANDARD.encode(input)
}

/// Inverse of [`encode_base64`]; the payload must decode to UTF-8 text.
pub fn decode_base64(input: &str) -> Result<String> {
    let bytes = STANDARD.decode(input).map_err(|err| {
        tracing::debug!(%err, "base64 decode failed");
        err
    })?;
    Ok(String::from_utf8(bytes)?)
}
