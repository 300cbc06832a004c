use clap::{Parser, ValueEnum};
use estrich_config::GeneralConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `estrich` binary.
#[derive(Debug, Parser)]
#[command(
    name = "estrich",
    version,
    about = "EstrichManager - EN 13813 classification and conformity toolbox"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Table coloring: auto, always, never (defaults to general.color)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered above project and user config
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Merge command-line flags with configured defaults.
    pub fn global_flags(&self, general: &GeneralConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&general.default_format, true)
                .map_err(|error| anyhow::anyhow!("invalid general.default_format: {error}"))?,
        };
        let color = match self.color {
            Some(color) => color,
            None => ColorMode::from_str(&general.color, true)
                .map_err(|error| anyhow::anyhow!("invalid general.color: {error}"))?,
        };

        Ok(GlobalFlags {
            format,
            color,
            quiet: self.quiet,
            verbose: self.verbose,
        })
    }
}
