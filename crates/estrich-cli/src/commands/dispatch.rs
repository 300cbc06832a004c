use estrich_config::EstrichConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{self, Outcome};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &EstrichConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    match command {
        Commands::Classify(args) => commands::classify::handle(args, flags),
        Commands::Classes(args) => commands::classes::handle(args, flags),
        Commands::Designation { action } => commands::designation::handle(action, config, flags),
        Commands::Conformity { action } => commands::conformity::handle(action, flags),
        Commands::Stats(args) => commands::stats::handle(args, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
