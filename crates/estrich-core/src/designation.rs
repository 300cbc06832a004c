//! Designation composer, parser, describer, and structural validator.
//!
//! A designation is the binder token followed by property class tokens in
//! canonical [`PropertyFamily`] order, joined by [`DELIMITER`]:
//!
//! ```text
//! CT-C25-F4-A22
//! SR-C50-F10-AR0.5-B1.5-IR10-Bfl-s1
//! ```
//!
//! Composition only fails when the binder type is missing or unknown.
//! Whether the classes required for a given binder are present is decided by
//! [`crate::requirements`], not here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::classes::parse_class_value;
use crate::enums::{BinderType, PropertyFamily, WearResistanceMethod};
use crate::errors::CoreError;

/// Token separator of a designation.
pub const DELIMITER: char = '-';

/// Fire classes for floorings (EN 13501-1) accepted in a designation.
pub const FIRE_CLASSES: [&str; 11] = [
    "A1fl", "A2fl-s1", "A2fl-s2", "Bfl-s1", "Bfl-s2", "Cfl-s1", "Cfl-s2", "Dfl-s1", "Dfl-s2",
    "Efl", "Ffl",
];

/// Class prefixes, longest first so that `RWFC` wins over `RWA` and `AR`
/// over `A`.
const PREFIXES: [(&str, PropertyFamily, Option<WearResistanceMethod>); 9] = [
    ("RWFC", PropertyFamily::Rwfc, None),
    ("RWA", PropertyFamily::Wear, Some(WearResistanceMethod::Rwa)),
    ("AR", PropertyFamily::Wear, Some(WearResistanceMethod::Bca)),
    ("SH", PropertyFamily::SurfaceHardness, None),
    ("IR", PropertyFamily::Impact, None),
    ("A", PropertyFamily::Wear, Some(WearResistanceMethod::Bohme)),
    ("B", PropertyFamily::Bond, None),
    ("C", PropertyFamily::Compressive, None),
    ("F", PropertyFamily::Flexural, None),
];

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Property classes to compose into a designation.
///
/// Field order here is irrelevant; tokens are always emitted in canonical
/// order. Absent and blank classes are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DesignationInput {
    pub binder_type: Option<String>,
    pub compressive_class: Option<String>,
    pub flexural_class: Option<String>,
    pub wear_class: Option<String>,
    pub surface_hardness_class: Option<String>,
    pub bond_class: Option<String>,
    pub impact_class: Option<String>,
    pub fire_class: Option<String>,
    pub rwfc_class: Option<String>,
}

impl DesignationInput {
    #[must_use]
    pub fn class_for(&self, family: PropertyFamily) -> Option<&str> {
        let value = match family {
            PropertyFamily::Compressive => &self.compressive_class,
            PropertyFamily::Flexural => &self.flexural_class,
            PropertyFamily::Wear => &self.wear_class,
            PropertyFamily::SurfaceHardness => &self.surface_hardness_class,
            PropertyFamily::Bond => &self.bond_class,
            PropertyFamily::Impact => &self.impact_class,
            PropertyFamily::Fire => &self.fire_class,
            PropertyFamily::Rwfc => &self.rwfc_class,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

/// A composed designation. Immutable; regenerate from new input instead of
/// editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Designation {
    binder: BinderType,
    tokens: Vec<String>,
}

impl Designation {
    /// Compose a designation from its property classes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] when the binder type is missing,
    /// blank, or not one of `CT`, `CA`, `MA`, `AS`, `SR`.
    pub fn compose(input: &DesignationInput) -> Result<Self, CoreError> {
        let raw = input
            .binder_type
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| CoreError::InvalidInput("binder type is required".to_string()))?;
        let binder = raw
            .parse::<BinderType>()
            .map_err(|_| CoreError::InvalidInput(format!("unknown binder type '{raw}'")))?;

        let tokens = PropertyFamily::ALL
            .into_iter()
            .filter_map(|family| input.class_for(family))
            .map(str::to_string)
            .collect();

        Ok(Self { binder, tokens })
    }

    #[must_use]
    pub const fn binder(&self) -> BinderType {
        self.binder
    }

    /// Property class tokens in canonical order, without the binder.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binder.as_str())?;
        for token in &self.tokens {
            write!(f, "{DELIMITER}{token}")?;
        }
        Ok(())
    }
}

/// Compose the designation string for `input`.
///
/// # Errors
///
/// See [`Designation::compose`].
pub fn generate_designation(input: &DesignationInput) -> Result<String, CoreError> {
    Designation::compose(input).map(|designation| designation.to_string())
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// One property token of a parsed designation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedToken {
    pub raw: String,
    /// `None` when the prefix is not recognised.
    pub family: Option<PropertyFamily>,
    pub wear_method: Option<WearResistanceMethod>,
    /// Numeric class suffix; `None` for fire classes and malformed suffixes.
    pub value: Option<f64>,
    pub well_formed: bool,
}

impl ParsedToken {
    fn classify(raw: &str) -> Self {
        let unknown = Self {
            raw: raw.to_string(),
            family: None,
            wear_method: None,
            value: None,
            well_formed: false,
        };

        if is_fire_token(raw) {
            return Self {
                family: Some(PropertyFamily::Fire),
                well_formed: FIRE_CLASSES.contains(&raw),
                ..unknown
            };
        }

        PREFIXES
            .iter()
            .find_map(|&(prefix, family, wear_method)| {
                let suffix = raw.strip_prefix(prefix)?;
                let value = parse_class_value(suffix);
                Some(Self {
                    raw: raw.to_string(),
                    family: Some(family),
                    wear_method,
                    value,
                    well_formed: value.is_some(),
                })
            })
            .unwrap_or(unknown)
    }
}

fn is_fire_token(raw: &str) -> bool {
    raw.find("fl").is_some_and(|index| index > 0 && index <= 2)
}

/// Lenient token-level view of a designation string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedDesignation {
    /// First token as written; empty for an empty designation.
    pub binder_token: String,
    pub binder: Option<BinderType>,
    pub tokens: Vec<ParsedToken>,
}

impl ParsedDesignation {
    /// Whether a well-formed or malformed token of `family` is present.
    #[must_use]
    pub fn has_family(&self, family: PropertyFamily) -> bool {
        self.tokens.iter().any(|token| token.family == Some(family))
    }
}

/// Split a designation into binder and property tokens.
///
/// Never fails; unrecognised pieces are kept as tokens without a family.
/// Smoke sub-classes of fire tokens (`Bfl-s1`) are joined back together.
#[must_use]
pub fn parse_designation(designation: &str) -> ParsedDesignation {
    let trimmed = designation.trim();
    let mut pieces = trimmed.split(DELIMITER).map(str::trim);

    let binder_token = pieces.next().unwrap_or_default().to_string();
    let binder = binder_token.parse::<BinderType>().ok();

    let mut raw_tokens: Vec<String> = Vec::new();
    for piece in pieces {
        let continues_fire = is_smoke_class(piece)
            && raw_tokens
                .last()
                .is_some_and(|previous| is_fire_token(previous) && !previous.contains(DELIMITER));
        match raw_tokens.last_mut() {
            Some(previous) if continues_fire => {
                previous.push(DELIMITER);
                previous.push_str(piece);
            }
            _ => raw_tokens.push(piece.to_string()),
        }
    }

    ParsedDesignation {
        binder_token,
        binder,
        tokens: raw_tokens.iter().map(|raw| ParsedToken::classify(raw)).collect(),
    }
}

fn is_smoke_class(piece: &str) -> bool {
    piece
        .strip_prefix('s')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

// ---------------------------------------------------------------------------
// Description
// ---------------------------------------------------------------------------

fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    format!("{rounded}")
}

fn describe_token(token: &ParsedToken) -> String {
    let Some(family) = token.family else {
        return token.raw.clone();
    };
    let label = family.label();

    if family == PropertyFamily::Fire {
        return format!("{label} {}", token.raw);
    }
    let Some(value) = token.value else {
        return format!("{label} {}", token.raw);
    };

    match (family, token.wear_method) {
        (PropertyFamily::Wear, Some(method)) => {
            let spec = method.test_type().spec();
            format!(
                "{label} nach {} {} (≤ {} {})",
                method.display_name(),
                token.raw,
                format_number(value * spec.scale),
                spec.unit
            )
        }
        (PropertyFamily::Impact, _) => {
            format!("{label} {} (≥ {} Nm)", token.raw, format_number(value))
        }
        (PropertyFamily::Rwfc, _) => {
            format!("{label} {} (≥ {} N)", token.raw, format_number(value))
        }
        _ => format!("{label} {} (≥ {} N/mm²)", token.raw, format_number(value)),
    }
}

/// Render a German plain-language description of a designation.
///
/// Works on any subset of tokens; unknown tokens are rendered verbatim.
/// An empty designation yields an empty string.
#[must_use]
pub fn get_description(designation: &str) -> String {
    let parsed = parse_designation(designation);
    if parsed.binder_token.is_empty() {
        return String::new();
    }

    let head = parsed.binder.map_or_else(
        || format!("Estrich (Bindemittel {})", parsed.binder_token),
        |binder| format!("{} ({binder})", binder.full_name()),
    );

    let details: Vec<String> = parsed.tokens.iter().map(describe_token).collect();
    if details.is_empty() {
        head
    } else {
        format!("{head} mit {}", details.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Accumulated structural problems of a designation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a designation for structural problems.
///
/// Every problem is collected; the check never stops at the first one.
/// Whether the classes required for the binder are present is not checked
/// here, see [`crate::requirements::missing_required_properties`].
#[must_use]
pub fn validate_designation(designation: &str) -> ValidationReport {
    let mut errors = Vec::new();
    let parsed = parse_designation(designation);

    if parsed.binder_token.is_empty() && parsed.tokens.is_empty() {
        errors.push("Bezeichnung ist leer".to_string());
        return ValidationReport { errors };
    }

    if parsed.binder.is_none() {
        errors.push(format!("Unbekannte Bindemittelart: {}", parsed.binder_token));
    }

    let mut seen: BTreeMap<PropertyFamily, &ParsedToken> = BTreeMap::new();
    let mut last_family: Option<PropertyFamily> = None;

    for token in &parsed.tokens {
        if token.raw.is_empty() {
            errors.push("Leeres Element in der Bezeichnung".to_string());
            continue;
        }
        let Some(family) = token.family else {
            errors.push(format!("Unbekanntes Element: {}", token.raw));
            continue;
        };

        if !token.well_formed {
            if family == PropertyFamily::Fire {
                errors.push(format!("Unbekannte Brandverhaltensklasse: {}", token.raw));
            } else {
                errors.push(format!("Ungültiger Zahlenwert in {}", token.raw));
            }
        }

        if let Some(previous) = seen.get(&family) {
            if family == PropertyFamily::Wear && previous.wear_method != token.wear_method {
                errors.push(format!(
                    "Widersprüchliche Verschleißprüfverfahren: {} und {}",
                    previous.raw, token.raw
                ));
            } else {
                errors.push(format!(
                    "Mehrfache Angabe für {}: {} und {}",
                    family.label(),
                    previous.raw,
                    token.raw
                ));
            }
            continue;
        }
        seen.insert(family, token);

        if last_family.is_some_and(|last| family < last) {
            errors.push(format!(
                "{} steht nicht in der normgerechten Reihenfolge",
                token.raw
            ));
        }
        last_family = Some(family);
    }

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(binder: &str) -> DesignationInput {
        DesignationInput {
            binder_type: Some(binder.to_string()),
            ..DesignationInput::default()
        }
    }

    #[test]
    fn composes_in_canonical_order() {
        let designation = generate_designation(&DesignationInput {
            rwfc_class: Some("RWFC350".into()),
            flexural_class: Some("F4".into()),
            compressive_class: Some("C25".into()),
            ..input("CT")
        })
        .unwrap();
        assert_eq!(designation, "CT-C25-F4-RWFC350");
    }

    #[test]
    fn blank_classes_are_skipped() {
        let designation = generate_designation(&DesignationInput {
            compressive_class: Some("  ".into()),
            flexural_class: Some(" F5 ".into()),
            ..input("ca")
        })
        .unwrap();
        assert_eq!(designation, "CA-F5");
    }

    #[test]
    fn binder_alone_is_a_designation() {
        assert_eq!(generate_designation(&input("MA")).unwrap(), "MA");
    }

    #[test]
    fn unknown_binder_is_rejected() {
        let err = generate_designation(&input("XT")).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidInput("unknown binder type 'XT'".to_string())
        );
    }

    #[test]
    fn compose_exposes_tokens() {
        let designation = Designation::compose(&DesignationInput {
            wear_class: Some("A22".into()),
            ..input("CT")
        })
        .unwrap();
        assert_eq!(designation.binder(), BinderType::Ct);
        assert_eq!(designation.tokens(), ["A22".to_string()]);
    }

    #[test]
    fn parser_rejoins_fire_smoke_class() {
        let parsed = parse_designation("SR-B1.5-Bfl-s1-RWFC250");
        let raws: Vec<&str> = parsed.tokens.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(raws, ["B1.5", "Bfl-s1", "RWFC250"]);
        assert_eq!(parsed.tokens[1].family, Some(PropertyFamily::Fire));
        assert!(parsed.tokens[1].well_formed);
    }

    #[test]
    fn parser_prefers_longest_prefix() {
        let parsed = parse_designation("CT-AR0.5-RWA10-RWFC150");
        let methods: Vec<_> = parsed.tokens.iter().map(|t| t.wear_method).collect();
        assert_eq!(
            methods,
            [
                Some(WearResistanceMethod::Bca),
                Some(WearResistanceMethod::Rwa),
                None
            ]
        );
        assert_eq!(parsed.tokens[2].family, Some(PropertyFamily::Rwfc));
    }

    #[test]
    fn fire_class_starting_like_compressive_is_not_compressive() {
        let parsed = parse_designation("CT-Cfl-s1");
        assert_eq!(parsed.tokens[0].family, Some(PropertyFamily::Fire));
    }

    #[test]
    fn description_names_binder_and_properties() {
        let text = get_description("CT-C25-F4-AR0.5");
        assert_eq!(
            text,
            "Zementestrich (CT) mit Druckfestigkeit C25 (≥ 25 N/mm²), \
             Biegezugfestigkeit F4 (≥ 4 N/mm²), \
             Verschleißwiderstand nach BCA AR0.5 (≤ 50 µm)"
        );
    }

    #[test]
    fn description_tolerates_partial_and_unknown_tokens() {
        assert_eq!(get_description("CA"), "Calciumsulfatestrich (CA)");
        assert_eq!(
            get_description("QQ-C30-XYZ"),
            "Estrich (Bindemittel QQ) mit Druckfestigkeit C30 (≥ 30 N/mm²), XYZ"
        );
        assert_eq!(get_description("   "), "");
    }

    #[test]
    fn validator_collects_every_problem() {
        let report = validate_designation("XX-F4-C25-A22-AR1-Q7-C3x");
        assert_eq!(
            report.errors,
            vec![
                "Unbekannte Bindemittelart: XX".to_string(),
                "C25 steht nicht in der normgerechten Reihenfolge".to_string(),
                "Widersprüchliche Verschleißprüfverfahren: A22 und AR1".to_string(),
                "Unbekanntes Element: Q7".to_string(),
                "Ungültiger Zahlenwert in C3x".to_string(),
                "Mehrfache Angabe für Druckfestigkeit: C25 und C3x".to_string(),
            ]
        );
    }

    #[test]
    fn validator_accepts_binder_only() {
        assert!(validate_designation("AS").is_valid());
    }

    #[test]
    fn validator_flags_empty_and_blank_tokens() {
        assert_eq!(
            validate_designation("").errors,
            vec!["Bezeichnung ist leer".to_string()]
        );
        assert_eq!(
            validate_designation("CT--C25").errors,
            vec!["Leeres Element in der Bezeichnung".to_string()]
        );
    }

    #[test]
    fn validator_flags_unknown_fire_class() {
        assert_eq!(
            validate_designation("CT-C25-Gfl").errors,
            vec!["Unbekannte Brandverhaltensklasse: Gfl".to_string()]
        );
    }
}
