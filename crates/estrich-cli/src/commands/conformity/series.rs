use estrich_core::TestType;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::output::output;

pub fn run(
    values: &[f64],
    declared_class: &str,
    test_type: TestType,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let report = estrich_core::evaluate_series(values, declared_class, test_type);
    tracing::info!(
        declared_class,
        test_type = test_type.as_str(),
        passed = report.passed,
        failed = report.failed,
        "series evaluated"
    );
    output(&report, flags.format)?;
    Ok(Outcome::from_passed(report.all_passed))
}
