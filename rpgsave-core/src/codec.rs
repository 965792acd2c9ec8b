//! The codec seam between the conversion pipeline and the compression scheme.

use crate::error::Result;
use crate::lzstring;

/// A reversible transformation between document text and container text.
///
/// Implementations must satisfy `decompress(&compress(x)?)? == x` for every
/// document they accept.
pub trait Codec {
    /// Compresses a document into container text.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be represented by the codec.
    fn compress(&self, document: &[u8]) -> Result<String>;

    /// Restores the document bytes stored in a container.
    ///
    /// # Errors
    ///
    /// Returns an error when the container is empty, malformed or truncated.
    fn decompress(&self, container: &str) -> Result<Vec<u8>>;
}

/// lz-string `compressToBase64` / `decompressFromBase64`, as used by the
/// RPG Maker MV engine for its save files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LzStringCodec;

impl Codec for LzStringCodec {
    fn compress(&self, document: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(document)?;
        Ok(lzstring::compress_to_base64(text))
    }

    fn decompress(&self, container: &str) -> Result<Vec<u8>> {
        lzstring::decompress_from_base64(container).map(String::into_bytes)
    }
}
