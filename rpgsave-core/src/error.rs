//! Error types and result handling for container encoding and decoding.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the lz-string codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The container holds no data at all.
    Empty,

    /// A character outside the base64 alphabet was found in the container.
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Character offset inside the trimmed container text
        position: usize,
    },

    /// The bit stream ended before the end-of-stream marker.
    Truncated,

    /// A dictionary reference points past the entries built so far.
    InvalidCode {
        /// Code read from the stream
        code: usize,
        /// Number of dictionary entries at the time of the read
        dictionary_size: usize,
    },

    /// The document handed to the encoder is not UTF-8 text.
    InvalidUtf8(std::str::Utf8Error),

    /// The decoded code units do not form valid Unicode text.
    InvalidUtf16,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "container is empty"),
            Error::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid character {character:?} at offset {position}, expected base64 alphabet"
            ),
            Error::Truncated => write!(f, "compressed data is truncated"),
            Error::InvalidCode {
                code,
                dictionary_size,
            } => write!(
                f,
                "compressed data is corrupt: reference {code} exceeds dictionary of {dictionary_size} entries"
            ),
            Error::InvalidUtf8(err) => write!(f, "document is not valid UTF-8: {err}"),
            Error::InvalidUtf16 => write!(f, "decoded data is not valid UTF-16 text"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidUtf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8(err)
    }
}
