//! Error kinds that are not tied to network communication.

use crate::kind::impl_kind;
use crate::{Category, Kind};
use std::fmt::Display;
use thiserror::Error;

//===========================
// region:      --- Fixed-message kinds

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("Operation timed out.")]
pub struct TimeoutError;

impl_kind!(TimeoutError, "TIMEOUT_ERROR", Category::Interrupted);

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("The requested method is not implemented.")]
pub struct NotImplementedError;

impl_kind!(NotImplementedError, "NOT_IMPLEMENTED_ERROR", Category::Unimplemented);

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("An invalid argument was specified.")]
pub struct ArgumentError;

impl_kind!(ArgumentError, "ARGUMENT_ERROR", Category::InvalidArgument);

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("The argument could not be parsed correctly.")]
pub struct ArgumentParseError;

impl_kind!(ArgumentParseError, "ARGUMENT_PARSE_ERROR", Category::InvalidArgument);

// endregion:   --- Fixed-message kinds

//===========================
// region:      --- RuntimeError

/// General runtime fault. Without a message it renders its kind name, which never matches the
/// message of any other kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeError {
    msg: Option<String>,
}

impl RuntimeError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_msg(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
        }
    }

    pub fn msg(&self) -> &str {
        match &self.msg {
            Some(msg) => msg.as_str(),
            None => Self::KIND_ID.name(),
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.msg())
    }
}

impl std::error::Error for RuntimeError {}

impl_kind!(RuntimeError, "RUNTIME_ERROR", Category::Runtime);

// endregion:   --- RuntimeError

//===========================
// region:      --- Context-carrying kinds

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("The name {} is ambiguous.", .name.as_deref().unwrap_or_default())]
pub struct AmbiguousArgumentError {
    name: Option<String>,
}

impl AmbiguousArgumentError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl_kind!(AmbiguousArgumentError, "AMBIGUOUS_ARGUMENT_ERROR", Category::Runtime);

/// Raised when a stream is detected as closed. The stream identifier is opaque; the stream itself
/// is neither owned nor closed by this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Stream {stream} is closed.")]
pub struct StreamClosedError {
    stream: String,
}

impl StreamClosedError {
    pub fn new(stream: impl Into<String>) -> Self {
        Self {
            stream: stream.into(),
        }
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }
}

impl_kind!(StreamClosedError, "STREAM_CLOSED_ERROR", Category::Io);

// endregion:   --- Context-carrying kinds
