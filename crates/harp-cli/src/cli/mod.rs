//! CLI for harp.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use harp_core::config::{self, OutputFormat};
use std::path::Path;

use commands::{run_dump, run_validate};

/// Top-level CLI for harp.
#[derive(Debug, Parser)]
#[command(name = "harp")]
#[command(about = "harp: inspect HAR captures as replayable HTTP requests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a HAR file and report whether it is usable.
    Validate {
        /// Path to the HAR file.
        path: String,
    },

    /// Rebuild every request in a HAR file and print it (nothing is sent).
    Dump {
        /// Path to the HAR file.
        path: String,

        /// Leave recorded cookies off the rebuilt requests.
        #[arg(long)]
        ignore_har_cookies: bool,

        /// Output format (defaults to the `format` key in config.toml).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Curl,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Curl => OutputFormat::Curl,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate { path } => run_validate(Path::new(&path))?,
            CliCommand::Dump {
                path,
                ignore_har_cookies,
                format,
            } => {
                let ignore = ignore_har_cookies || cfg.ignore_har_cookies;
                let format = format.map(OutputFormat::from).unwrap_or(cfg.format);
                run_dump(Path::new(&path), ignore, format)?;
            }
        }

        Ok(())
    }
}
