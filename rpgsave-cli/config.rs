//! Configuration types and constants for the `rpgsave` tool.

use log::LevelFilter;

/// File extension of compressed save containers
pub const CONTAINER_EXTENSION: &str = "rpgsave";

/// File extension of decoded documents
pub const DOCUMENT_EXTENSION: &str = "json";

/// Configuration for a single conversion run
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Overwrite an existing output file without asking
    pub force: bool,
    /// Pretty-print decoded JSON documents
    pub pretty: bool,
    /// Verbosity level (as counted by `-v` occurrences)
    pub verbose: u8,
    /// Quiet level (as counted by `-q` occurrences)
    pub quiet: u8,
    /// Wait for Enter before the process exits
    pub pause: bool,
}

impl CliConfig {
    /// Log level selected by the `-v` / `-q` counters.
    ///
    /// Starts at `info`; each `-v` raises it one step, each `-q` lowers it.
    pub fn log_level(&self) -> LevelFilter {
        const LEVELS: [LevelFilter; 6] = [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ];
        let index = (3 + i16::from(self.verbose) - i16::from(self.quiet)).clamp(0, 5);
        LEVELS[usize::try_from(index).unwrap_or(3)]
    }
}
