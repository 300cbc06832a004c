use estrich_core::responses::DesignationResponse;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::output::output;

pub fn run(designation: &str, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let response = DesignationResponse {
        designation: designation.trim().to_string(),
        description: estrich_core::get_description(designation),
    };
    output(&response, flags.format)?;
    Ok(Outcome::Conforming)
}
