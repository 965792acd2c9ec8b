//! High-level file processing and CLI orchestration.

use std::io;
use std::path::Path;

use rpgsave_core::{Codec, LzStringCodec};

use crate::config::CliConfig;
use crate::error::{Error, Result};
use crate::format::{classify, Kind};
use crate::operations::{decode_file, encode_file, Outcome};
use crate::prompt::{AssumeYes, Confirm, LineConfirm};

/// Processes a single file according to its detected kind.
///
/// This is the main entry point for a conversion. It orchestrates the
/// complete workflow:
///
/// 1. Classifies the input by extension
/// 2. Decodes containers or encodes documents
/// 3. Consults `confirm` if the output file already exists
///
/// # Parameters
///
/// * `input` - Path to the input file
/// * `codec` - Codec used for the conversion
/// * `confirm` - Source of the answer if the output file already exists
/// * `config` - Run configuration
///
/// # Returns
///
/// The [`Outcome`] of the run.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions, without
/// touching the file system, and otherwise any error of [`decode_file`] or
/// [`encode_file`].
pub fn process_file<K, C>(
    input: &Path,
    codec: &K,
    confirm: &mut C,
    config: &CliConfig,
) -> Result<Outcome>
where
    K: Codec + ?Sized,
    C: Confirm + ?Sized,
{
    log::info!("file path: {}", input.display());

    match classify(input)? {
        Kind::Container => decode_file(input, codec, confirm, config),
        Kind::Document => encode_file(input, codec, confirm, config),
    }
}

/// Runs the tool on the file given on the command line.
///
/// Uses the lz-string codec and asks on the terminal before replacing an
/// existing output, unless `config.force` is set.
///
/// # Parameters
///
/// * `file` - Input path, or `None` if no argument was given
/// * `config` - Run configuration
///
/// # Errors
///
/// Returns [`Error::MissingArgument`] if `file` is `None` and otherwise any
/// error of [`process_file`], converted into an [`io::Error`] that keeps the
/// original [`Error`] as its inner error.
pub fn run_cli(file: Option<&Path>, config: &CliConfig) -> io::Result<Outcome> {
    let input = file.ok_or(Error::MissingArgument)?;

    let mut confirm: Box<dyn Confirm> = if config.force {
        Box::new(AssumeYes)
    } else {
        Box::new(LineConfirm::stdin())
    };

    let outcome = process_file(input, &LzStringCodec, confirm.as_mut(), config)?;
    Ok(outcome)
}
