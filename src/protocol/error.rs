//! Error types shared by every message codec

use std::io;
use thiserror::Error;

/// A protocol-level failure: a message or field failed validation.
///
/// `func` names the operation that rejected the message so peers that send
/// malformed data can be logged precisely.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{func}: {description}")]
pub struct MessageError {
    /// Operation that detected the problem
    pub func: &'static str,
    /// Human-readable description of the problem
    pub description: String,
}

impl MessageError {
    pub fn new(func: &'static str, description: impl Into<String>) -> Self {
        Self {
            func,
            description: description.into(),
        }
    }
}

/// Errors returned by message encode/decode.
///
/// The two variants are disjoint: `Io` means the stream could not supply or
/// accept the bytes, `Message` means the message itself is unacceptable.
#[derive(Error, Debug)]
pub enum WireError {
    /// Underlying stream failure, passed through untouched.
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Message(#[from] MessageError),
}

pub type WireResult<T> = Result<T, WireError>;

impl WireError {
    /// Shorthand for building a [`WireError::Message`].
    pub fn message(func: &'static str, description: impl Into<String>) -> Self {
        WireError::Message(MessageError::new(func, description))
    }

    pub fn is_message_error(&self) -> bool {
        matches!(self, WireError::Message(_))
    }

    /// Kind of the underlying I/O failure, if this is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            WireError::Io(err) => Some(err.kind()),
            WireError::Message(_) => None,
        }
    }
}
