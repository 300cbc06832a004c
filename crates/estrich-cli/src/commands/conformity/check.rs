use estrich_core::TestType;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::output::output;

pub fn run(
    measured: f64,
    declared_class: &str,
    test_type: TestType,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let verdict = estrich_core::check_conformity(measured, declared_class, test_type);
    output(&verdict, flags.format)?;
    Ok(Outcome::from_passed(verdict.passed))
}
