use clap::Subcommand;

/// Conformity evaluation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConformityCommands {
    /// Check one measured value against a declared class.
    Check {
        #[arg(allow_negative_numbers = true)]
        measured: f64,
        declared_class: String,
        #[arg(long)]
        test_type: String,
    },
    /// Evaluate a series of measurements with FPC statistics.
    Series {
        declared_class: String,
        #[arg(long)]
        test_type: String,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Evaluate a JSON file of measurement records.
    Batch { file: String },
}
