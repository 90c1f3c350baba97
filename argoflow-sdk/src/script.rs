//! Script-body capture for manifest embedding
//!
//! [`workflow_script`](crate::workflow_script) runs at compile time and
//! stores a function's body text next to the function itself. The step
//! builder reads the captured text and embeds it, base64-encoded, in the
//! manifest's script field.

use serde::Serialize;

use crate::encoding::encode_base64;

/// A function body captured at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Script {
    /// Sanitized function name, usable as a step name.
    pub name: &'static str,
    /// Literal body text, signature line and outer braces excluded.
    pub body: &'static str,
    /// File that defines the function.
    pub file: &'static str,
    /// Line of the function definition.
    pub line: u32,
}

impl Script {
    /// Body text in the base64 form manifest fields expect.
    pub fn encoded_body(&self) -> String {
        encode_base64(self.body)
    }

    /// Dumps script metadata as pretty JSON to stdout.
    pub fn print_metadata(&self) {
        let json = serde_json::to_string_pretty(self).unwrap();
        println!("{}", json);
    }
}

/// Body text of `script`, passing `None` through.
pub fn body(script: Option<&Script>) -> Option<&'static str> {
    script.map(|script| script.body)
}
