//! Binder types, property families, wear methods, and test types.
//!
//! Binder types serialize as their upper-case EN 13813 token (`"CT"`); every
//! other enum uses `snake_case`. Textual parsing via [`FromStr`] is
//! case-insensitive and accepts `-` in place of `_`.
//!
//! [`TestType::spec`] is the single lookup table for conformity checks: each
//! variant maps to its class prefix, better-direction, unit, and the scale
//! applied to the declared class suffix.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Declared BCA class suffixes are expressed in hundredths of the measured
/// unit: `AR0.5` means at most 50 µm wear depth.
pub const BCA_CLASS_SCALE: f64 = 100.0;

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

// ---------------------------------------------------------------------------
// BinderType
// ---------------------------------------------------------------------------

/// Binder of a screed material, first token of every designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinderType {
    /// Cementitious screed.
    Ct,
    /// Calcium sulfate screed.
    Ca,
    /// Magnesite screed.
    Ma,
    /// Mastic asphalt screed.
    As,
    /// Synthetic resin screed.
    Sr,
}

impl BinderType {
    pub const ALL: [Self; 5] = [Self::Ct, Self::Ca, Self::Ma, Self::As, Self::Sr];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ct => "CT",
            Self::Ca => "CA",
            Self::Ma => "MA",
            Self::As => "AS",
            Self::Sr => "SR",
        }
    }

    /// German product name used in descriptions.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Ct => "Zementestrich",
            Self::Ca => "Calciumsulfatestrich",
            Self::Ma => "Magnesiaestrich",
            Self::As => "Gussasphaltestrich",
            Self::Sr => "Kunstharzestrich",
        }
    }
}

impl fmt::Display for BinderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinderType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|binder| binder.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| CoreError::unknown("binder type", s))
    }
}

// ---------------------------------------------------------------------------
// PropertyFamily
// ---------------------------------------------------------------------------

/// A classified property slot of a designation.
///
/// Declaration order is the canonical token order of a designation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PropertyFamily {
    Compressive,
    Flexural,
    Wear,
    SurfaceHardness,
    Bond,
    Impact,
    Fire,
    Rwfc,
}

impl PropertyFamily {
    /// All families in canonical designation order.
    pub const ALL: [Self; 8] = [
        Self::Compressive,
        Self::Flexural,
        Self::Wear,
        Self::SurfaceHardness,
        Self::Bond,
        Self::Impact,
        Self::Fire,
        Self::Rwfc,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compressive => "compressive",
            Self::Flexural => "flexural",
            Self::Wear => "wear",
            Self::SurfaceHardness => "surface_hardness",
            Self::Bond => "bond",
            Self::Impact => "impact",
            Self::Fire => "fire",
            Self::Rwfc => "rwfc",
        }
    }

    /// German property name used in descriptions and validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compressive => "Druckfestigkeit",
            Self::Flexural => "Biegezugfestigkeit",
            Self::Wear => "Verschleißwiderstand",
            Self::SurfaceHardness => "Oberflächenhärte",
            Self::Bond => "Haftzugfestigkeit",
            Self::Impact => "Schlagfestigkeit",
            Self::Fire => "Brandverhalten",
            Self::Rwfc => "Rollwiderstand mit Bodenbelag",
        }
    }
}

impl fmt::Display for PropertyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WearResistanceMethod
// ---------------------------------------------------------------------------

/// Wear resistance test methodology. Classes of different methods are not
/// comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WearResistanceMethod {
    Bohme,
    Bca,
    Rwa,
}

impl WearResistanceMethod {
    pub const ALL: [Self; 3] = [Self::Bohme, Self::Bca, Self::Rwa];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bohme => "bohme",
            Self::Bca => "bca",
            Self::Rwa => "rwa",
        }
    }

    /// Conformity test type that evaluates classes of this method.
    #[must_use]
    pub const fn test_type(self) -> TestType {
        match self {
            Self::Bohme => TestType::WearBohme,
            Self::Bca => TestType::WearBca,
            Self::Rwa => TestType::WearRwa,
        }
    }

    #[must_use]
    pub const fn prefix(self) -> &'static str {
        self.test_type().spec().prefix
    }

    /// Unit of the measured value.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        self.test_type().spec().unit
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bohme => "Böhme",
            Self::Bca => "BCA",
            Self::Rwa => "RWA",
        }
    }
}

impl fmt::Display for WearResistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WearResistanceMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "bohme" | "böhme" | "boehme" => Ok(Self::Bohme),
            "bca" => Ok(Self::Bca),
            "rwa" => Ok(Self::Rwa),
            _ => Err(CoreError::unknown("wear resistance method", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Which side of a class threshold a measured value has to be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

// ---------------------------------------------------------------------------
// TestType
// ---------------------------------------------------------------------------

/// Laboratory test whose result is compared against a declared class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestType {
    CompressiveStrength,
    FlexuralStrength,
    SurfaceHardness,
    BondStrength,
    Rwfc,
    WearBohme,
    WearBca,
    WearRwa,
}

/// Per-test-type evaluation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestTypeSpec {
    /// The only class prefix accepted for this test type.
    pub prefix: &'static str,
    pub direction: Direction,
    /// Unit of the measured value.
    pub unit: &'static str,
    /// Factor turning a class suffix into a threshold in `unit`.
    pub scale: f64,
}

impl TestType {
    pub const ALL: [Self; 8] = [
        Self::CompressiveStrength,
        Self::FlexuralStrength,
        Self::SurfaceHardness,
        Self::BondStrength,
        Self::Rwfc,
        Self::WearBohme,
        Self::WearBca,
        Self::WearRwa,
    ];

    #[must_use]
    pub const fn spec(self) -> TestTypeSpec {
        const fn higher(prefix: &'static str, unit: &'static str) -> TestTypeSpec {
            TestTypeSpec {
                prefix,
                direction: Direction::HigherIsBetter,
                unit,
                scale: 1.0,
            }
        }
        const fn lower(prefix: &'static str, unit: &'static str, scale: f64) -> TestTypeSpec {
            TestTypeSpec {
                prefix,
                direction: Direction::LowerIsBetter,
                unit,
                scale,
            }
        }

        match self {
            Self::CompressiveStrength => higher("C", "N/mm²"),
            Self::FlexuralStrength => higher("F", "N/mm²"),
            Self::SurfaceHardness => higher("SH", "N/mm²"),
            Self::BondStrength => higher("B", "N/mm²"),
            Self::Rwfc => higher("RWFC", "N"),
            Self::WearBohme => lower("A", "cm³/50cm²", 1.0),
            Self::WearBca => lower("AR", "µm", BCA_CLASS_SCALE),
            Self::WearRwa => lower("RWA", "cm³", 1.0),
        }
    }

    #[must_use]
    pub const fn is_lower_better(self) -> bool {
        matches!(self.spec().direction, Direction::LowerIsBetter)
    }

    /// Designation slot whose classes this test type evaluates.
    #[must_use]
    pub const fn family(self) -> PropertyFamily {
        match self {
            Self::CompressiveStrength => PropertyFamily::Compressive,
            Self::FlexuralStrength => PropertyFamily::Flexural,
            Self::SurfaceHardness => PropertyFamily::SurfaceHardness,
            Self::BondStrength => PropertyFamily::Bond,
            Self::Rwfc => PropertyFamily::Rwfc,
            Self::WearBohme | Self::WearBca | Self::WearRwa => PropertyFamily::Wear,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompressiveStrength => "compressive_strength",
            Self::FlexuralStrength => "flexural_strength",
            Self::SurfaceHardness => "surface_hardness",
            Self::BondStrength => "bond_strength",
            Self::Rwfc => "rwfc",
            Self::WearBohme => "wear_bohme",
            Self::WearBca => "wear_bca",
            Self::WearRwa => "wear_rwa",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|test_type| test_type.as_str() == normalized)
            .ok_or_else(|| CoreError::unknown("test type", s))
    }
}

// ---------------------------------------------------------------------------
// IntendedUse
// ---------------------------------------------------------------------------

/// Intended use of a screed, which decides the mandatory property classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntendedUse {
    /// Screed is the finished, directly trafficked floor surface.
    WearingSurface,
    /// Screed receives a floor covering.
    UnderFlooring,
}

impl IntendedUse {
    pub const ALL: [Self; 2] = [Self::WearingSurface, Self::UnderFlooring];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WearingSurface => "wearing_surface",
            Self::UnderFlooring => "under_flooring",
        }
    }
}

impl fmt::Display for IntendedUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntendedUse {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|intended_use| intended_use.as_str() == normalized)
            .ok_or_else(|| CoreError::unknown("intended use", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binder_type_serializes_as_token() {
        let json = serde_json::to_string(&BinderType::Ct).unwrap();
        assert_eq!(json, "\"CT\"");
        let back: BinderType = serde_json::from_str("\"SR\"").unwrap();
        assert_eq!(back, BinderType::Sr);
    }

    #[test]
    fn binder_type_parses_case_insensitively() {
        assert_eq!("ct".parse::<BinderType>(), Ok(BinderType::Ct));
        assert_eq!(" MA ".parse::<BinderType>(), Ok(BinderType::Ma));
        assert!("XX".parse::<BinderType>().is_err());
    }

    #[test]
    fn family_order_is_canonical() {
        let mut sorted = PropertyFamily::ALL;
        sorted.sort();
        assert_eq!(sorted, PropertyFamily::ALL);
        assert!(PropertyFamily::Wear < PropertyFamily::SurfaceHardness);
        assert!(PropertyFamily::Fire < PropertyFamily::Rwfc);
    }

    #[test]
    fn wear_test_types_are_lower_is_better() {
        for test_type in TestType::ALL {
            let expected = matches!(
                test_type,
                TestType::WearBohme | TestType::WearBca | TestType::WearRwa
            );
            assert_eq!(test_type.is_lower_better(), expected, "{test_type}");
        }
    }

    #[test]
    fn only_bca_is_scaled() {
        for test_type in TestType::ALL {
            let scale = test_type.spec().scale;
            if test_type == TestType::WearBca {
                assert!((scale - BCA_CLASS_SCALE).abs() < f64::EPSILON);
            } else {
                assert!((scale - 1.0).abs() < f64::EPSILON, "{test_type}");
            }
        }
    }

    #[test]
    fn test_type_parses_hyphenated_alias() {
        assert_eq!("wear-bca".parse::<TestType>(), Ok(TestType::WearBca));
        assert_eq!(
            "Compressive_Strength".parse::<TestType>(),
            Ok(TestType::CompressiveStrength)
        );
        let err = "tensile".parse::<TestType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown test type: 'tensile'");
    }

    #[test]
    fn wear_method_accepts_umlaut_spelling() {
        assert_eq!(
            "Böhme".parse::<WearResistanceMethod>(),
            Ok(WearResistanceMethod::Bohme)
        );
        assert_eq!(WearResistanceMethod::Bca.prefix(), "AR");
        assert_eq!(WearResistanceMethod::Rwa.unit(), "cm³");
    }
}
