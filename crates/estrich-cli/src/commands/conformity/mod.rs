mod batch;
mod check;
mod series;

use estrich_core::TestType;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConformityCommands;
use crate::commands::Outcome;
use crate::commands::shared::parse::parse_enum;

/// Handle `estrich conformity`.
pub fn handle(action: &ConformityCommands, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    match action {
        ConformityCommands::Check {
            measured,
            declared_class,
            test_type,
        } => {
            let test_type = parse_enum::<TestType>(test_type, "test type")?;
            check::run(*measured, declared_class, test_type, flags)
        }
        ConformityCommands::Series {
            declared_class,
            test_type,
            values,
        } => {
            let test_type = parse_enum::<TestType>(test_type, "test type")?;
            series::run(values, declared_class, test_type, flags)
        }
        ConformityCommands::Batch { file } => batch::run(file, flags),
    }
}
