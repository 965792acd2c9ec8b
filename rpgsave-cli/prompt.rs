//! Interactive confirmation before an existing output file is replaced.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Capability to ask the operator a yes/no question.
pub trait Confirm {
    /// Asks `question` and blocks until an answer is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Whether an answer counts as "yes".
///
/// Only a literal `y` is accepted, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim() == "y"
}

/// Asks questions on a writer and reads single-line answers from a reader.
///
/// End of input counts as a negative answer.
#[derive(Debug)]
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R, W> LineConfirm<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a confirmation source over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirm<io::StdinLock<'static>, io::Stderr> {
    /// Confirmation source for an interactive terminal.
    ///
    /// The question goes to stderr so stdout stays free for other output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R, W> Confirm for LineConfirm<R, W>
where
    R: BufRead,
    W: Write,
{
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} (y/n) ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Answers every question with "yes", used for `--force`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(true)
    }
}

/// Result of the overwrite gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The target path is free; the output may be written.
    Proceed,
    /// The operator declined to replace the existing file.
    Abort,
}

/// Clears the way for writing `target`.
///
/// A missing target proceeds without a question. An existing target is only
/// removed after the operator confirms; any other answer leaves it untouched.
///
/// # Parameters
///
/// * `target` - Output path about to be written
/// * `confirm` - Source of the operator's answer
///
/// # Errors
///
/// Returns [`Error::Prompt`] if the answer cannot be read and
/// [`Error::WriteFailure`] if the existing file cannot be removed.
pub fn guard<C>(target: &Path, confirm: &mut C) -> Result<Decision>
where
    C: Confirm + ?Sized,
{
    if !target.exists() {
        return Ok(Decision::Proceed);
    }

    log::warn!("{} exists", target.display());
    let question = format!("{} exists, overwrite?", target.display());
    let accepted = confirm
        .confirm(&question)
        .map_err(|source| Error::Prompt {
            path: target.to_path_buf(),
            source,
        })?;

    if !accepted {
        return Ok(Decision::Abort);
    }

    log::info!("removing existing {}", target.display());
    fs::remove_file(target).map_err(|source| Error::WriteFailure {
        path: target.to_path_buf(),
        source,
    })?;

    Ok(Decision::Proceed)
}

/// Blocks until a line (or end of input) is read, after printing a notice.
///
/// Keeps a console window opened by drag-and-drop visible until the operator
/// has read the result.
///
/// # Errors
///
/// Returns an error if writing the notice or reading the line fails.
pub fn wait_for_enter(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "press enter to exit")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
