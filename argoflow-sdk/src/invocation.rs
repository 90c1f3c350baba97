//! Caller context tracking with lightweight source-location capture
//!
//! The DSL threads an [`InvocationStack`] through its public entry points
//! instead of walking a runtime call stack. Each entry point records the
//! call made into it with `#[track_caller]`, which is enough to auto-name
//! steps, point error messages at user code, and derive a default workflow
//! name from the outermost caller.

use std::collections::BTreeSet;
use std::fmt;
use std::panic::Location;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::naming::sanitize;

/// Source position captured at a DSL entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Location of the code that called the current function.
    #[track_caller]
    pub fn capture() -> Self {
        Location::caller().into()
    }

    /// Stem of the source file, e.g. `train_model` for `src/train_model.rs`.
    pub fn file_stem(&self) -> &'static str {
        Path::new(self.file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One user-code call recorded on the invocation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub location: SourceLocation,
}

/// Names treated as workflow entry points when resolving the root caller.
///
/// When several user frames are live (nested builders, test harnesses), the
/// outermost frame whose name is recognized here wins; otherwise the
/// outermost frame is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPointPolicy {
    pub recognized: BTreeSet<String>,
}

impl EntryPointPolicy {
    pub fn recognize<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recognized: names.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.recognized.contains(name)
    }
}

impl Default for EntryPointPolicy {
    fn default() -> Self {
        Self::recognize(["main"])
    }
}

/// Explicit caller context threaded through DSL entry points.
///
/// Frames are pushed by the DSL's public functions on entry and popped on
/// return; queries over the stack replace runtime frame walking.
#[derive(Debug, Clone, Default)]
pub struct InvocationStack {
    frames: Vec<Frame>,
    policy: EntryPointPolicy,
}

impl InvocationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: EntryPointPolicy) -> Self {
        Self {
            frames: Vec::new(),
            policy,
        }
    }

    /// Records entry into a DSL call made from user code.
    ///
    /// The stored location is the caller's, not this function's.
    #[track_caller]
    pub fn enter(&mut self, name: impl Into<String>) {
        let frame = Frame {
            name: name.into(),
            location: SourceLocation::capture(),
        };
        trace!(name = %frame.name, location = %frame.location, "enter frame");
        self.frames.push(frame);
    }

    /// Drops the innermost frame when the matching DSL call returns.
    pub fn exit(&mut self) -> Option<Frame> {
        let frame = self.frames.pop();
        if let Some(frame) = &frame {
            trace!(name = %frame.name, "exit frame");
        }
        frame
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Sanitized name and source location of the innermost live frame.
    ///
    /// Step builders use this to auto-name steps and to point error
    /// messages at the user call that produced them.
    pub fn invocation_location(&self) -> Result<(String, SourceLocation)> {
        let frame = self
            .frames
            .last()
            .ok_or(Error::StackExhausted("invocation stack is empty"))?;
        Ok((sanitize(&frame.name), frame.location))
    }

    /// Outermost frame recognized as an entry point, falling back to the
    /// outermost frame when none matches.
    pub fn root_caller(&self) -> Result<&Frame> {
        self.frames
            .iter()
            .find(|frame| self.policy.matches(&frame.name))
            .or_else(|| self.frames.first())
            .ok_or(Error::StackExhausted("invocation stack is empty"))
    }

    /// Default workflow name: the root caller's source-file stem, sanitized.
    pub fn workflow_filename(&self) -> Result<String> {
        let root = self.root_caller()?;
        Ok(sanitize(root.location.file_stem()))
    }
}
