//! Detection of the two file kinds handled by the tool.

use std::ffi::OsStr;
use std::path::Path;

use crate::config::{CONTAINER_EXTENSION, DOCUMENT_EXTENSION};
use crate::error::{Error, Result};

/// The two representations of a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Compressed `.rpgsave` container read by the game engine
    Container,
    /// Decoded `.json` document
    Document,
}

impl Kind {
    /// File extension (without the dot) used for this kind.
    pub const fn extension(self) -> &'static str {
        match self {
            Kind::Container => CONTAINER_EXTENSION,
            Kind::Document => DOCUMENT_EXTENSION,
        }
    }

    /// The kind a file of this kind is converted into.
    pub const fn opposite(self) -> Self {
        match self {
            Kind::Container => Kind::Document,
            Kind::Document => Kind::Container,
        }
    }
}

/// Determines the kind of a file from its extension.
///
/// Extensions are matched exactly, so `save1.RPGSAVE` is not recognized.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the extension is missing or is
/// neither `.rpgsave` nor `.json`.
pub fn classify(path: &Path) -> Result<Kind> {
    match path.extension().and_then(OsStr::to_str) {
        Some(CONTAINER_EXTENSION) => Ok(Kind::Container),
        Some(DOCUMENT_EXTENSION) => Ok(Kind::Document),
        _ => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
