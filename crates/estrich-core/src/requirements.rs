//! Mandatory property classes per binder type and intended use.
//!
//! The composer accepts any subset of classes; callers that need a complete
//! declaration check it against this table.
//!
//! | Binder | always | wearing surface adds |
//! |--------|--------|----------------------|
//! | CT | compressive, flexural | wear |
//! | CA | compressive, flexural | wear |
//! | MA | compressive, flexural | wear, surface hardness |
//! | AS | none | none |
//! | SR | bond | wear, impact |
//!
//! Mastic asphalt is classified by indentation (`IC`/`IP`), which the class
//! tables here do not cover.

use crate::designation::parse_designation;
use crate::enums::{BinderType, IntendedUse, PropertyFamily};

/// Property families a designation for `binder` must carry, in canonical
/// order.
#[must_use]
pub fn required_properties_for(
    binder: BinderType,
    intended_use: IntendedUse,
) -> Vec<PropertyFamily> {
    use crate::enums::PropertyFamily::{Bond, Compressive, Flexural, Impact, SurfaceHardness, Wear};

    let base: &[PropertyFamily] = match binder {
        BinderType::Ct | BinderType::Ca | BinderType::Ma => &[Compressive, Flexural],
        BinderType::As => &[],
        BinderType::Sr => &[Bond],
    };
    let wearing: &[PropertyFamily] = match (intended_use, binder) {
        (IntendedUse::UnderFlooring, _) | (IntendedUse::WearingSurface, BinderType::As) => &[],
        (IntendedUse::WearingSurface, BinderType::Ct | BinderType::Ca) => &[Wear],
        (IntendedUse::WearingSurface, BinderType::Ma) => &[Wear, SurfaceHardness],
        (IntendedUse::WearingSurface, BinderType::Sr) => &[Wear, Impact],
    };

    let mut families: Vec<PropertyFamily> = base.iter().chain(wearing).copied().collect();
    families.sort_unstable();
    families
}

/// Required families absent from `designation`.
///
/// Empty when the binder token is not recognised; the structural validator
/// reports that case.
#[must_use]
pub fn missing_required_properties(
    designation: &str,
    intended_use: IntendedUse,
) -> Vec<PropertyFamily> {
    let parsed = parse_designation(designation);
    let Some(binder) = parsed.binder else {
        return Vec::new();
    };
    required_properties_for(binder, intended_use)
        .into_iter()
        .filter(|family| !parsed.has_family(*family))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::enums::PropertyFamily::{Bond, Compressive, Flexural, Impact, SurfaceHardness, Wear};

    #[test]
    fn cement_wearing_surface_needs_wear_class() {
        assert_eq!(
            required_properties_for(BinderType::Ct, IntendedUse::WearingSurface),
            vec![Compressive, Flexural, Wear]
        );
        assert_eq!(
            required_properties_for(BinderType::Ct, IntendedUse::UnderFlooring),
            vec![Compressive, Flexural]
        );
    }

    #[test]
    fn magnesite_and_resin_wearing_surfaces() {
        assert_eq!(
            required_properties_for(BinderType::Ma, IntendedUse::WearingSurface),
            vec![Compressive, Flexural, Wear, SurfaceHardness]
        );
        assert_eq!(
            required_properties_for(BinderType::Sr, IntendedUse::WearingSurface),
            vec![Wear, Bond, Impact]
        );
    }

    #[test]
    fn mastic_asphalt_has_no_required_tables() {
        for intended_use in IntendedUse::ALL {
            assert!(required_properties_for(BinderType::As, intended_use).is_empty());
        }
    }

    #[test]
    fn missing_properties_of_designation() {
        assert_eq!(
            missing_required_properties("CT-C25", IntendedUse::WearingSurface),
            vec![Flexural, Wear]
        );
        assert!(
            missing_required_properties("CT-C25-F4-A22", IntendedUse::WearingSurface).is_empty()
        );
        assert!(missing_required_properties("ZZ", IntendedUse::WearingSurface).is_empty());
    }
}
