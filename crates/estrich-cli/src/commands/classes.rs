use estrich_core::WearResistanceMethod;
use estrich_core::responses::WearClassesResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassesArgs;
use crate::commands::Outcome;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `estrich classes`.
pub fn handle(args: &ClassesArgs, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let method = parse_enum::<WearResistanceMethod>(&args.method, "method")?;
    output(&list_classes(method), flags.format)?;
    Ok(Outcome::Conforming)
}

fn list_classes(method: WearResistanceMethod) -> WearClassesResponse {
    WearClassesResponse {
        method,
        unit: method.unit().to_string(),
        classes: estrich_core::wear_classes(method),
    }
}

#[cfg(test)]
mod tests {
    use estrich_core::WearResistanceMethod;
    use pretty_assertions::assert_eq;

    use super::list_classes;

    #[test]
    fn bca_classes_best_first() {
        let response = list_classes(WearResistanceMethod::Bca);
        assert_eq!(response.unit, "µm");
        assert_eq!(response.classes.first().map(String::as_str), Some("AR0.5"));
        assert_eq!(response.classes.last().map(String::as_str), Some("AR6"));
    }
}
