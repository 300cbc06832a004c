use estrich_core::IntendedUse;
use estrich_core::responses::ValidationResponse;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::output::output;

pub fn run(
    designation: &str,
    intended_use: IntendedUse,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let response = validate(designation, intended_use);
    output(&response, flags.format)?;
    Ok(Outcome::from_passed(
        response.valid && response.missing_required.is_empty(),
    ))
}

fn validate(designation: &str, intended_use: IntendedUse) -> ValidationResponse {
    let report = estrich_core::validate_designation(designation);
    let missing_required = estrich_core::missing_required_properties(designation, intended_use);
    if !report.is_valid() {
        tracing::debug!(designation, errors = report.errors.len(), "designation invalid");
    }

    ValidationResponse {
        designation: designation.trim().to_string(),
        valid: report.is_valid(),
        errors: report.errors,
        intended_use,
        missing_required,
    }
}
