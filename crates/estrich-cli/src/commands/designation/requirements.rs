use estrich_core::responses::RequirementsResponse;
use estrich_core::{BinderType, IntendedUse};

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

pub fn run(
    binder: &str,
    intended_use: IntendedUse,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let binder_type = parse_enum::<BinderType>(binder, "binder")?;
    let response = RequirementsResponse {
        binder_type,
        intended_use,
        required: estrich_core::required_properties_for(binder_type, intended_use),
    };
    output(&response, flags.format)?;
    Ok(Outcome::Conforming)
}
