//! RPG Maker MV save converter
//!
//! Decodes `.rpgsave` files into `.json` documents and encodes `.json`
//! documents back into `.rpgsave` files. Dropping a file onto the executable
//! passes it as the single argument.

use std::io;
use std::process;

mod opts;

use opts::RpgsaveOpts;

use rpgsave_cli::{format_error_for_stderr, init_logger, run_cli, wait_for_enter, Outcome};

const PROGRAM_NAME: &str = "rpgsave";

fn main() {
    let opts = RpgsaveOpts::parse();
    let config = opts.config();

    if let Err(err) = init_logger(&config) {
        eprintln!("{PROGRAM_NAME}: cannot install logger: {err}");
    }
    log::info!("starting {PROGRAM_NAME}");

    let code = match run_cli(opts.file(), &config) {
        Ok(Outcome::Written { .. }) => {
            log::info!("done!");
            0
        }
        Ok(Outcome::Declined { .. }) => 0,
        Err(err) => {
            if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
                eprintln!("{msg}");
                if opts.file().is_none() {
                    eprintln!("{}", RpgsaveOpts::usage());
                }
            }
            1
        }
    };

    if config.pause {
        if let Err(err) = wait_for_enter(io::stdin().lock(), io::stderr()) {
            log::debug!("cannot wait for enter: {err}");
        }
    }

    process::exit(code);
}
