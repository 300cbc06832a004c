mod compose;
mod describe;
mod requirements;
mod validate;

use estrich_config::EstrichConfig;
use estrich_core::IntendedUse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DesignationCommands;
use crate::commands::Outcome;
use crate::commands::shared::parse::parse_enum;

/// Handle `estrich designation`.
pub fn handle(
    action: &DesignationCommands,
    config: &EstrichConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    match action {
        DesignationCommands::Compose {
            binder,
            compressive,
            flexural,
            wear,
            surface_hardness,
            bond,
            impact,
            fire,
            rwfc,
        } => {
            let input = estrich_core::DesignationInput {
                binder_type: Some(binder.clone()),
                compressive_class: compressive.clone(),
                flexural_class: flexural.clone(),
                wear_class: wear.clone(),
                surface_hardness_class: surface_hardness.clone(),
                bond_class: bond.clone(),
                impact_class: impact.clone(),
                fire_class: fire.clone(),
                rwfc_class: rwfc.clone(),
            };
            compose::run(&input, flags)
        }
        DesignationCommands::Describe { designation } => describe::run(designation, flags),
        DesignationCommands::Validate {
            designation,
            intended_use,
        } => {
            let intended_use = resolve_intended_use(intended_use.as_deref(), config)?;
            validate::run(designation, intended_use, flags)
        }
        DesignationCommands::Requirements {
            binder,
            intended_use,
        } => {
            let intended_use = resolve_intended_use(intended_use.as_deref(), config)?;
            requirements::run(binder, intended_use, flags)
        }
    }
}

/// `--use` wins over `designation.intended_use` from configuration.
fn resolve_intended_use(
    input: Option<&str>,
    config: &EstrichConfig,
) -> anyhow::Result<IntendedUse> {
    match input {
        Some(raw) => parse_enum::<IntendedUse>(raw, "intended use"),
        None => Ok(config.designation.intended_use()?),
    }
}

#[cfg(test)]
mod tests {
    use estrich_config::EstrichConfig;
    use estrich_core::IntendedUse;

    use super::resolve_intended_use;

    #[test]
    fn falls_back_to_configured_use() {
        let config = EstrichConfig::default();
        let resolved = resolve_intended_use(None, &config).expect("default resolves");
        assert_eq!(resolved, IntendedUse::UnderFlooring);
    }

    #[test]
    fn flag_overrides_config() {
        let config = EstrichConfig::default();
        let resolved =
            resolve_intended_use(Some("wearing-surface"), &config).expect("flag resolves");
        assert_eq!(resolved, IntendedUse::WearingSurface);
    }

    #[test]
    fn invalid_flag_names_the_field() {
        let err = resolve_intended_use(Some("roof"), &EstrichConfig::default())
            .expect_err("must fail");
        assert!(err.to_string().contains("invalid intended use 'roof'"));
    }
}
