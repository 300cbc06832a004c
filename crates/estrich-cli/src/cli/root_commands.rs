use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{ConformityCommands, DesignationCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Derive the class of a measured value.
    Classify(ClassifyArgs),
    /// List the classes and unit of a wear resistance method.
    Classes(ClassesArgs),
    /// Compose, describe, and validate designations.
    Designation {
        #[command(subcommand)]
        action: DesignationCommands,
    },
    /// Conformity of measured values against declared classes.
    Conformity {
        #[command(subcommand)]
        action: ConformityCommands,
    },
    /// Summary statistics over measured values.
    Stats(StatsArgs),
    /// Dump the JSON schema of a registered type, or list all names.
    Schema(SchemaArgs),
}

/// Property whose class `estrich classify` derives.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PropertyArg {
    Compressive,
    Flexural,
    Wear,
    Rwfc,
    SurfaceHardness,
    Bond,
}

impl PropertyArg {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compressive => "compressive",
            Self::Flexural => "flexural",
            Self::Wear => "wear",
            Self::Rwfc => "rwfc",
            Self::SurfaceHardness => "surface_hardness",
            Self::Bond => "bond",
        }
    }
}

/// Arguments for `estrich classify`.
#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    #[arg(value_enum)]
    pub property: PropertyArg,
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    /// Wear resistance method (bohme, bca, rwa); required for `wear`.
    #[arg(long)]
    pub method: Option<String>,
}

/// Arguments for `estrich classes`.
#[derive(Clone, Debug, Args)]
pub struct ClassesArgs {
    pub method: String,
}

/// Arguments for `estrich stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

/// Arguments for `estrich schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name; omit to list all names.
    pub name: Option<String>,
}
