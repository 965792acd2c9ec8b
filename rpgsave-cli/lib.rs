//! Shared functionality for the `rpgsave` command-line tool.
//!
//! This crate holds everything between the command line and the codec: format
//! detection, output naming, the overwrite confirmation gate and the two
//! conversion directions. The binary only parses arguments, installs the logger
//! and maps the result onto an exit status.

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod logging;
pub mod operations;
pub mod process;
pub mod prompt;


pub use config::{CliConfig, CONTAINER_EXTENSION, DOCUMENT_EXTENSION};
pub use error::{format_error_for_stderr, Error, Result};
pub use format::{classify, Kind};
pub use io::{generate_output_filename, read_input, write_output};
pub use logging::init_logger;
pub use operations::{decode_file, encode_file, Outcome};
pub use process::{process_file, run_cli};
pub use prompt::{guard, wait_for_enter, AssumeYes, Confirm, Decision, LineConfirm};
