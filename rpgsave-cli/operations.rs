//! The two conversion directions between containers and documents.

use std::path::{Path, PathBuf};

use rpgsave_core::{Codec, ConversionSummary};

use crate::config::CliConfig;
use crate::error::{Error, Result};
use crate::format::Kind;
use crate::io::{generate_output_filename, read_input, write_output};
use crate::prompt::{guard, Confirm, Decision};

/// How a conversion run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The converted file was written.
    Written {
        /// Path of the new file
        output: PathBuf,
        /// Byte counts of the conversion
        summary: ConversionSummary,
    },
    /// The output already existed and the operator chose to keep it.
    Declined {
        /// Path of the untouched existing file
        output: PathBuf,
    },
}

impl Outcome {
    /// Path of the output file, written or not.
    pub fn output(&self) -> &Path {
        match self {
            Outcome::Written { output, .. } | Outcome::Declined { output } => output,
        }
    }
}

/// Re-indents a decoded JSON document.
///
/// The document is parsed into a structural value, so key order is kept and
/// string contents are never touched. Payloads that are not JSON are returned
/// unchanged.
fn pretty_print(payload: Vec<u8>, input: &Path) -> Vec<u8> {
    let value = match serde_json::from_slice::<serde_json::Value>(&payload) {
        Ok(value) => value,
        Err(err) => {
            log::warn!(
                "{}: decoded data is not valid JSON ({err}), writing it unformatted",
                input.display()
            );
            return payload;
        }
    };

    match serde_json::to_vec_pretty(&value) {
        Ok(pretty) => pretty,
        Err(err) => {
            log::warn!("{}: cannot pretty-print ({err}), writing it unformatted", input.display());
            payload
        }
    }
}

/// Views container bytes as text.
///
/// Containers only hold base64 characters, so a byte sequence that is not UTF-8
/// is reported as an invalid character at the offset the codec would use.
fn container_text(content: &[u8]) -> std::result::Result<&str, rpgsave_core::Error> {
    std::str::from_utf8(content).map_err(|err| {
        let valid = String::from_utf8_lossy(&content[..err.valid_up_to()]);
        rpgsave_core::Error::InvalidCharacter {
            character: char::REPLACEMENT_CHARACTER,
            position: valid.trim_start().chars().count(),
        }
    })
}

/// Runs the overwrite gate and writes the payload.
fn write_converted<C>(
    output: PathBuf,
    payload: &[u8],
    bytes_read: usize,
    confirm: &mut C,
) -> Result<Outcome>
where
    C: Confirm + ?Sized,
{
    log::debug!("output file: {}", output.display());

    if guard(&output, confirm)? == Decision::Abort {
        log::info!("not overwriting {}", output.display());
        return Ok(Outcome::Declined { output });
    }

    log::info!("writing {}", output.display());
    write_output(&output, payload)?;

    let summary = ConversionSummary::new(bytes_read as u64, payload.len() as u64);
    log::debug!(
        "converted {} bytes to {} bytes ({:.1}% ratio)",
        summary.bytes_read,
        summary.bytes_written,
        summary.ratio() * 100.0
    );

    Ok(Outcome::Written { output, summary })
}

/// Decodes a `.rpgsave` container into a `.json` document.
///
/// The decompressed text is written verbatim unless `config.pretty` is set.
/// Nothing is written if the container cannot be decoded.
///
/// # Parameters
///
/// * `input` - Path of the container file
/// * `codec` - Codec used to decompress the container
/// * `confirm` - Source of the answer if the output file already exists
/// * `config` - Run configuration
///
/// # Returns
///
/// The [`Outcome`] of the run; a declined overwrite is not an error.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The input cannot be read ([`Error::ReadFailure`])
/// - The container is not valid compressed data ([`Error::DecodeFailure`])
/// - The overwrite answer cannot be read ([`Error::Prompt`])
/// - The old output cannot be removed or the new one written ([`Error::WriteFailure`])
pub fn decode_file<K, C>(
    input: &Path,
    codec: &K,
    confirm: &mut C,
    config: &CliConfig,
) -> Result<Outcome>
where
    K: Codec + ?Sized,
    C: Confirm + ?Sized,
{
    let content = read_input(input)?;
    log::debug!("file size: {}", content.len());

    let decode_failure = |source: rpgsave_core::Error| Error::DecodeFailure {
        path: input.to_path_buf(),
        source,
    };

    log::info!("decompressing {}", input.display());
    let text = container_text(&content).map_err(decode_failure)?;
    let mut payload = codec.decompress(text).map_err(decode_failure)?;

    if config.pretty {
        log::debug!("pretty printing json");
        payload = pretty_print(payload, input);
    }

    let output = generate_output_filename(input, Kind::Container);
    write_converted(output, &payload, content.len(), confirm)
}

/// Encodes a `.json` document into a `.rpgsave` container.
///
/// Nothing is written if the document cannot be encoded.
///
/// # Parameters
///
/// * `input` - Path of the document file
/// * `codec` - Codec used to compress the document
/// * `confirm` - Source of the answer if the output file already exists
/// * `config` - Run configuration
///
/// # Returns
///
/// The [`Outcome`] of the run; a declined overwrite is not an error.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The input cannot be read ([`Error::ReadFailure`])
/// - The document is not UTF-8 text ([`Error::EncodeFailure`])
/// - The overwrite answer cannot be read ([`Error::Prompt`])
/// - The old output cannot be removed or the new one written ([`Error::WriteFailure`])
pub fn encode_file<K, C>(
    input: &Path,
    codec: &K,
    confirm: &mut C,
    config: &CliConfig,
) -> Result<Outcome>
where
    K: Codec + ?Sized,
    C: Confirm + ?Sized,
{
    let content = read_input(input)?;
    log::debug!("file size: {}", content.len());

    if config.pretty {
        log::debug!("--pretty only applies when decoding, ignoring it");
    }

    log::info!("compressing {}", input.display());
    let container = codec
        .compress(&content)
        .map_err(|source| Error::EncodeFailure {
            path: input.to_path_buf(),
            source,
        })?;

    let output = generate_output_filename(input, Kind::Document);
    write_converted(output, container.as_bytes(), content.len(), confirm)
}
