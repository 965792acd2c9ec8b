//! Command line argument parsing for the rpgsave utility.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use rpgsave_cli::CliConfig;

/// RPG Maker MV save converter
///
/// Decodes `.rpgsave` files into `.json` and encodes `.json` files back into
/// `.rpgsave`. The direction is chosen from the file extension.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser)]
#[command(
    name = "rpgsave",
    version,
    about = "Convert RPG Maker MV save files between .rpgsave and .json",
    long_about = "rpgsave decodes a .rpgsave save file into a .json document, or encodes a \
                 .json document back into a .rpgsave file. An existing output file is only \
                 replaced after confirmation.\n\n\
                 The output is written next to the input, not into the working directory. \
                 Every option is optional: a bare file argument, as passed when a file is \
                 dropped onto the executable, converts without further flags."
)]
pub struct RpgsaveOpts {
    /// Save file (.rpgsave) or document (.json) to convert
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Overwrite an existing output file without asking
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Pretty-print the decoded JSON document
    #[arg(short = 'p', long = "pretty")]
    pretty: bool,

    /// Verbose mode. Use twice for trace output.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress progress). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    quiet: u8,

    /// Wait for Enter before exiting
    #[arg(long = "pause")]
    pause: bool,
}

impl RpgsaveOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            force: self.force,
            pretty: self.pretty,
            verbose: self.verbose,
            quiet: self.quiet,
            pause: self.pause,
        }
    }

    /// File supplied on the command line
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// One-line usage summary
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}
