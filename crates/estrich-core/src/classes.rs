//! EN 13813 class tables.
//!
//! Every lookup is a greedy "best class the value qualifies for" rule. For
//! strength-like properties the table is walked from the best (largest)
//! threshold down and the first threshold `<= value` wins. For wear the table
//! is walked from the best (smallest) threshold up and the first threshold
//! `>= value` wins. Measured values are never rounded; boundaries are
//! inclusive at the threshold.
//!
//! Values outside the defined range map to sentinel strings rather than
//! errors so a batch pipeline can carry on and leave the decision to a human.

use tracing::debug;

use crate::enums::WearResistanceMethod;

/// Sentinel for strength-like values below the smallest defined class.
pub const BELOW_CLASS: &str = "unter Klasse";

/// Sentinel for RWFC values below the smallest defined class.
pub const BELOW_RWFC: &str = "unter RWFC150";

struct DescendingTable {
    prefix: &'static str,
    thresholds: &'static [f64],
    /// Fixed number of decimals in the class label, `None` for the shortest
    /// representation.
    decimals: Option<usize>,
    below: &'static str,
}

const COMPRESSIVE: DescendingTable = DescendingTable {
    prefix: "C",
    thresholds: &[
        80.0, 70.0, 60.0, 50.0, 40.0, 35.0, 30.0, 25.0, 20.0, 16.0, 12.0, 7.0, 5.0,
    ],
    decimals: None,
    below: BELOW_CLASS,
};

const FLEXURAL: DescendingTable = DescendingTable {
    prefix: "F",
    thresholds: &[
        50.0, 40.0, 30.0, 22.0, 20.0, 17.0, 15.0, 13.0, 10.0, 7.0, 5.0, 4.0, 3.0, 2.0, 1.0,
    ],
    decimals: None,
    below: BELOW_CLASS,
};

const RWFC: DescendingTable = DescendingTable {
    prefix: "RWFC",
    thresholds: &[550.0, 450.0, 350.0, 250.0, 150.0],
    decimals: None,
    below: BELOW_RWFC,
};

const SURFACE_HARDNESS: DescendingTable = DescendingTable {
    prefix: "SH",
    thresholds: &[200.0, 150.0, 100.0, 70.0, 50.0, 40.0, 30.0],
    decimals: None,
    below: BELOW_CLASS,
};

const BOND: DescendingTable = DescendingTable {
    prefix: "B",
    thresholds: &[2.0, 1.5, 1.0, 0.5, 0.2],
    decimals: Some(1),
    below: BELOW_CLASS,
};

impl DescendingTable {
    fn classify(&self, value: f64) -> String {
        self.thresholds
            .iter()
            .find(|&&threshold| value >= threshold)
            .map_or_else(
                || {
                    debug!(prefix = self.prefix, value, "value below smallest class");
                    self.below.to_string()
                },
                |&threshold| class_label(self.prefix, threshold, self.decimals),
            )
    }
}

/// Ascending class suffixes per wear method, best class first.
const fn wear_thresholds(method: WearResistanceMethod) -> &'static [f64] {
    match method {
        WearResistanceMethod::Bohme => &[1.5, 3.0, 6.0, 9.0, 12.0, 15.0, 22.0],
        WearResistanceMethod::Bca => &[0.5, 1.0, 2.0, 4.0, 6.0],
        WearResistanceMethod::Rwa => &[1.0, 10.0, 20.0, 100.0, 300.0],
    }
}

fn class_label(prefix: &str, threshold: f64, decimals: Option<usize>) -> String {
    match decimals {
        Some(decimals) => format!("{prefix}{threshold:.decimals$}"),
        None => format!("{prefix}{threshold}"),
    }
}

/// Parse the numeric suffix of a class token.
///
/// Accepts plain non-negative decimals only (`25`, `0.5`). Signs, exponents,
/// `inf`/`NaN`, and dangling separators are rejected, unlike `f64::from_str`.
pub(crate) fn parse_class_value(suffix: &str) -> Option<f64> {
    let mut parts = suffix.splitn(2, '.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(integer) || fraction.is_some_and(|fraction| !digits(fraction)) {
        return None;
    }
    suffix.parse().ok()
}

/// Compressive strength class (`C5` .. `C80`) for a value in N/mm².
///
/// There is no upper sentinel: values above 80 are `C80`.
#[must_use]
pub fn compressive_strength_class(value: f64) -> String {
    COMPRESSIVE.classify(value)
}

/// Flexural strength class (`F1` .. `F50`) for a value in N/mm².
#[must_use]
pub fn flexural_strength_class(value: f64) -> String {
    FLEXURAL.classify(value)
}

/// Rolling wheel resistance class with floor covering (`RWFC150` .. `RWFC550`).
#[must_use]
pub fn rwfc_class(value: f64) -> String {
    RWFC.classify(value)
}

/// Surface hardness class (`SH30` .. `SH200`) for a value in N/mm².
#[must_use]
pub fn surface_hardness_class(value: f64) -> String {
    SURFACE_HARDNESS.classify(value)
}

/// Bond strength class (`B0.2` .. `B2.0`) for a value in N/mm².
#[must_use]
pub fn bond_strength_class(value: f64) -> String {
    BOND.classify(value)
}

/// Wear resistance class for a measured wear value of the given method.
///
/// The value is in the method's unit (see [`WearResistanceMethod::unit`]).
/// For BCA that is µm, compared against the class suffix scaled by
/// [`crate::enums::BCA_CLASS_SCALE`]. Values worse than the worst class map
/// to `"über <worst class>"`.
#[must_use]
pub fn wear_resistance_class(method: WearResistanceMethod, value: f64) -> String {
    let prefix = method.prefix();
    let scale = method.test_type().spec().scale;
    let thresholds = wear_thresholds(method);

    if let Some(&threshold) = thresholds
        .iter()
        .find(|&&threshold| value <= threshold * scale)
    {
        return class_label(prefix, threshold, None);
    }

    debug!(method = method.as_str(), value, "value above worst wear class");
    let worst = thresholds.last().copied().unwrap_or_default();
    format!("über {}", class_label(prefix, worst, None))
}

/// String-keyed variant of [`wear_resistance_class`].
///
/// Returns an empty string for an unrecognised method.
#[must_use]
pub fn wear_resistance_class_by_name(method: &str, value: f64) -> String {
    method
        .parse::<WearResistanceMethod>()
        .map(|method| wear_resistance_class(method, value))
        .unwrap_or_default()
}

/// Ordered class labels of a wear method, best class first.
#[must_use]
pub fn wear_classes(method: WearResistanceMethod) -> Vec<String> {
    wear_thresholds(method)
        .iter()
        .map(|&threshold| class_label(method.prefix(), threshold, None))
        .collect()
}

/// Class labels a lookup in the given table can produce, best class first.
#[must_use]
pub fn standard_classes(prefix: &str) -> Vec<String> {
    let table = match prefix {
        "C" => &COMPRESSIVE,
        "F" => &FLEXURAL,
        "RWFC" => &RWFC,
        "SH" => &SURFACE_HARDNESS,
        "B" => &BOND,
        _ => {
            return WearResistanceMethod::ALL
                .into_iter()
                .find(|method| method.prefix() == prefix)
                .map(wear_classes)
                .unwrap_or_default();
        }
    };
    table
        .thresholds
        .iter()
        .map(|&threshold| class_label(table.prefix, threshold, table.decimals))
        .collect()
}
