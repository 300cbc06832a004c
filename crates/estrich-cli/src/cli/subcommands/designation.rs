use clap::Subcommand;

/// Designation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DesignationCommands {
    /// Compose a designation from property classes.
    Compose {
        /// Binder type (CT, CA, MA, AS, SR).
        #[arg(long)]
        binder: String,
        #[arg(long)]
        compressive: Option<String>,
        #[arg(long)]
        flexural: Option<String>,
        /// Wear resistance class of one method (A.., AR.., RWA..).
        #[arg(long)]
        wear: Option<String>,
        #[arg(long)]
        surface_hardness: Option<String>,
        #[arg(long)]
        bond: Option<String>,
        #[arg(long)]
        impact: Option<String>,
        #[arg(long)]
        fire: Option<String>,
        #[arg(long)]
        rwfc: Option<String>,
    },
    /// Describe a designation in plain language.
    Describe { designation: String },
    /// Check a designation for structural errors and missing classes.
    Validate {
        designation: String,
        /// Intended use (wearing-surface, under-flooring).
        #[arg(long = "use")]
        intended_use: Option<String>,
    },
    /// List the property classes required for a binder type.
    Requirements {
        #[arg(long)]
        binder: String,
        #[arg(long = "use")]
        intended_use: Option<String>,
    },
}
