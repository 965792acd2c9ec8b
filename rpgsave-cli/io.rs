//! File I/O operations and path manipulation for `rpgsave`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::format::Kind;

/// Generates the output filename for converting `input` of the given kind.
///
/// Exactly one trailing extension is replaced by the extension of the opposite
/// kind, and the output stays in the input's directory.
///
/// # Parameters
///
/// * `input` - The input file path
/// * `kind` - The kind of the input file
///
/// # Returns
///
/// The generated output path, e.g. `save1.json` for `save1.rpgsave`.
pub fn generate_output_filename(input: &Path, kind: Kind) -> PathBuf {
    input.with_extension(kind.opposite().extension())
}

/// Reads the whole input file into memory.
///
/// # Errors
///
/// Returns [`Error::ReadFailure`] if the file cannot be opened or read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::ReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the conversion result to a new file.
///
/// The file must not exist yet; the overwrite gate is responsible for removing
/// a previous output first. If writing fails after the file was created, the
/// partial file is removed again.
///
/// # Parameters
///
/// * `path` - Path of the output file
/// * `contents` - Complete conversion result
///
/// # Errors
///
/// Returns [`Error::WriteFailure`] if the file cannot be created or written.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let write_failure = |source: io::Error| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(write_failure)?;

    let written = file.write_all(contents).and_then(|()| file.flush());
    if let Err(source) = written {
        drop(file);
        if let Err(err) = fs::remove_file(path) {
            log::warn!("{}: cannot remove partial output: {err}", path.display());
        }
        return Err(write_failure(source));
    }

    Ok(())
}
