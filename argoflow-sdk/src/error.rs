//! Error types for the helper library

use thiserror::Error;

/// Errors surfaced by the helper functions.
///
/// Every variant is a caller contract violation or a malformed payload;
/// nothing is retried or recovered internally.
#[derive(Error, Debug)]
pub enum Error {
    /// A resource request was neither absent nor a mapping.
    #[error("resource request must be a mapping, got {found}")]
    ResourceSpecType { found: &'static str },

    /// An invocation-stack query ran against an empty stack.
    #[error("no caller frame available: {0}")]
    StackExhausted(&'static str),

    /// A payload was not valid base64.
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A decoded payload was not valid UTF-8 text.
    #[error("decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
