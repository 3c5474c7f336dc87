//! CLI helpers.

mod output;
mod stdout_logger;

use anyhow::{anyhow, bail, Result};

pub use self::output::{Output, Results};
use self::output::OutputKind;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON records.
    json: bool,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        // Keep stdout machine-readable in JSON mode by not installing the
        // logger at all.
        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Construct the result writer for these options.
    pub fn output(&self) -> Output<std::io::Stdout> {
        Output::new(
            std::io::stdout(),
            if self.json {
                OutputKind::Json
            } else {
                OutputKind::Normal
            },
        )
    }
}
