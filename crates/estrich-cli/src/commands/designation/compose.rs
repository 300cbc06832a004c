use estrich_core::DesignationInput;
use estrich_core::responses::DesignationResponse;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::output::output;

pub fn run(input: &DesignationInput, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let response = compose(input)?;
    output(&response, flags.format)?;
    Ok(Outcome::Conforming)
}

fn compose(input: &DesignationInput) -> anyhow::Result<DesignationResponse> {
    let designation = estrich_core::generate_designation(input)?;
    let description = estrich_core::get_description(&designation);
    Ok(DesignationResponse {
        designation,
        description,
    })
}

#[cfg(test)]
mod tests {
    use estrich_core::DesignationInput;
    use pretty_assertions::assert_eq;

    use super::compose;

    #[test]
    fn composes_in_canonical_order() {
        let input = DesignationInput {
            binder_type: Some("CT".into()),
            flexural_class: Some("F4".into()),
            compressive_class: Some("C25".into()),
            wear_class: Some("AR0.5".into()),
            ..DesignationInput::default()
        };
        let response = compose(&input).expect("compose");
        assert_eq!(response.designation, "CT-C25-F4-AR0.5");
        assert!(response.description.starts_with("Zementestrich (CT)"));
    }

    #[test]
    fn unknown_binder_is_an_error() {
        let input = DesignationInput {
            binder_type: Some("XT".into()),
            ..DesignationInput::default()
        };
        let err = compose(&input).expect_err("must fail");
        assert!(err.to_string().contains("unknown binder type 'XT'"));
    }
}
