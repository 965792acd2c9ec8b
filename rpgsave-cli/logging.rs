//! Logger installation for the `rpgsave` binary.
//!
//! Library code only talks to the `log` facade. The binary calls
//! [`init_logger`] once to route records to stderr through `env_logger`.

use log::SetLoggerError;

use crate::config::CliConfig;

/// Installs `env_logger` at the level selected by `-v` / `-q`.
///
/// `RUST_LOG` takes precedence over the command-line level when set.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init_logger(config: &CliConfig) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(true)
        .try_init()
}
