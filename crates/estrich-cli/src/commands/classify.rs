use estrich_core::WearResistanceMethod;
use estrich_core::responses::ClassificationResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ClassifyArgs, PropertyArg};
use crate::commands::Outcome;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `estrich classify`.
pub fn handle(args: &ClassifyArgs, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let response = classify(args.property, args.value, args.method.as_deref())?;
    output(&response, flags.format)?;
    Ok(Outcome::Conforming)
}

/// Table lookup for properties that need no test method.
fn strength_table(property: PropertyArg) -> Option<fn(f64) -> String> {
    match property {
        PropertyArg::Compressive => Some(estrich_core::compressive_strength_class),
        PropertyArg::Flexural => Some(estrich_core::flexural_strength_class),
        PropertyArg::Rwfc => Some(estrich_core::rwfc_class),
        PropertyArg::SurfaceHardness => Some(estrich_core::surface_hardness_class),
        PropertyArg::Bond => Some(estrich_core::bond_strength_class),
        PropertyArg::Wear => None,
    }
}

fn classify(
    property: PropertyArg,
    value: f64,
    method: Option<&str>,
) -> anyhow::Result<ClassificationResponse> {
    let (method, class) = match strength_table(property) {
        Some(table) => {
            if let Some(raw) = method {
                tracing::warn!(property = property.as_str(), method = raw, "--method ignored");
            }
            (None, table(value))
        }
        None => {
            let raw = method
                .ok_or_else(|| anyhow::anyhow!("--method is required for wear (bohme, bca, rwa)"))?;
            let method = parse_enum::<WearResistanceMethod>(raw, "method")?;
            (Some(method), estrich_core::wear_resistance_class(method, value))
        }
    };

    Ok(ClassificationResponse {
        property: property.as_str().to_string(),
        method,
        value,
        class,
    })
}
