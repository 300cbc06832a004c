use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::Outcome;
use crate::output::output;

/// Handle `estrich stats`.
pub fn handle(args: &StatsArgs, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    if args.values.is_empty() {
        tracing::warn!("no values given, statistics are all zero");
    }
    let statistics = estrich_core::calculate_statistics(&args.values);
    output(&statistics, flags.format)?;
    Ok(Outcome::Conforming)
}
