// mod.rs - Data structures module

pub mod clinical;
pub mod expression;
pub mod loaders;
pub mod patient;

// Re-export main types for convenience
pub use clinical::{ClinicalFeatureMap, ClinicalRow, ClinicalTable};
pub use expression::ExpressionCohort;
pub use patient::{PatientKey, PatientKeyExtractor, PROJECT_PREFIX};
