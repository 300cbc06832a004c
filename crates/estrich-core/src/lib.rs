//! # estrich-core
//!
//! EN 13813 classification and conformity logic for EstrichManager.
//!
//! This crate is pure computation with no I/O and no shared state:
//! - Class lookup tables mapping measured values to property classes
//! - Designation composer, parser, describer, and structural validator
//! - Conformity evaluator with per-test-type direction and scaling
//! - FPC statistics and series reports
//! - Mandatory property classes per binder type and intended use
//! - CLI response types

pub mod classes;
pub mod conformity;
pub mod designation;
pub mod enums;
pub mod errors;
pub mod requirements;
pub mod responses;

pub use classes::{
    bond_strength_class, compressive_strength_class, flexural_strength_class, rwfc_class,
    surface_hardness_class, wear_classes, wear_resistance_class, wear_resistance_class_by_name,
};
pub use conformity::{
    ConformityVerdict, SeriesReport, Statistics, calculate_statistics, check_conformity,
    check_conformity_by_name, evaluate_series,
};
pub use designation::{
    Designation, DesignationInput, ValidationReport, generate_designation, get_description,
    parse_designation, validate_designation,
};
pub use enums::{BinderType, IntendedUse, PropertyFamily, TestType, WearResistanceMethod};
pub use errors::CoreError;
pub use requirements::{missing_required_properties, required_properties_for};
