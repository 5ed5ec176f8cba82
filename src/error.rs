use std::fmt;
use std::str::Utf8Error;

use crate::compress::CompressionError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures from the encode side of the codec, plus a wrapper for decode failures so callers can
/// funnel both through one type.
#[derive(Debug)]
pub enum Error {
    /// The raw document was larger than the hard ceiling. No URL is produced.
    SizeExceeded { max: usize, actual: usize },
    /// The DEFLATE encoder failed. In-memory compression shouldn't do this, but it's reported
    /// instead of panicking.
    Compression(CompressionError),
    /// A fragment failed to decode.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::SizeExceeded { max, actual } => write!(
                f,
                "Document too large: {} bytes, maximum allowed is {} bytes",
                actual, max
            ),
            Error::Compression(ref err) => write!(f, "Failed compression step: {}", err),
            Error::Decode(ref err) => write!(f, "Failed decode: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Compression(ref err) => Some(err),
            Error::Decode(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<CompressionError> for Error {
    fn from(e: CompressionError) -> Self {
        Self::Compression(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

/// A URL or fragment couldn't be turned back into a document.
///
/// This is fatal for the one decode call that produced it, and nothing else. A page rendering the
/// fragment is expected to show a fallback view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The fragment has no `/` between the title and the payload.
    MissingSeparator,
    /// The payload segment is empty.
    EmptyPayload,
    /// The payload contains a character outside `[A-Za-z0-9_-]`.
    InvalidCharacter { index: usize, character: char },
    /// The payload length can't be produced by base64 (`4n+1` characters).
    InvalidLength(usize),
    /// Any other base64 failure.
    Transport(String),
    /// The payload isn't a valid zlib stream, or it inflates past the allowed size.
    Decompress(CompressionError),
    /// The inflated bytes aren't UTF-8.
    NotUtf8(Utf8Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::MissingSeparator => {
                f.write_str("Fragment has no '/' separating title and payload")
            }
            DecodeError::EmptyPayload => f.write_str("Fragment payload is empty"),
            DecodeError::InvalidCharacter { index, character } => write!(
                f,
                "Payload character {:?} at position {} is not base64url",
                character, index
            ),
            DecodeError::InvalidLength(len) => {
                write!(f, "Payload length {} is not a valid base64url length", len)
            }
            DecodeError::Transport(ref err) => write!(f, "Payload is not valid base64url: {}", err),
            DecodeError::Decompress(ref err) => write!(f, "Failed decompression step: {}", err),
            DecodeError::NotUtf8(ref err) => write!(f, "Document is not UTF-8: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            DecodeError::Decompress(ref err) => Some(err),
            DecodeError::NotUtf8(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<CompressionError> for DecodeError {
    fn from(e: CompressionError) -> Self {
        Self::Decompress(e)
    }
}

impl From<Utf8Error> for DecodeError {
    fn from(e: Utf8Error) -> Self {
        Self::NotUtf8(e)
    }
}
