// lib.rs - clinmatch library root

//! # clinmatch - Match TCGA expression samples to complete clinical records
//!
//! This library finds the patients of an RNA-seq expression matrix whose
//! clinical records, merged across several clinical source files, carry a
//! value for every requested clinical feature.
//!
//! ## Features
//!
//! - **Identifier normalization**: sample identifiers (`TCGA-28-2513-01A-...`) and
//!   patient barcodes (`TCGA-28-2513`) both map to the patient key `28-2513`
//! - **Multi-file aggregation**: later clinical files overwrite earlier values,
//!   missing values never erase present ones
//! - **Column repair**: rows carrying an unlabeled leading index column are realigned
//! - **Deterministic reports**: patient columns are sorted lexicographically
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use clinmatch::prelude::*;
//!
//! let extractor = PatientKeyExtractor::new();
//! let features = load_feature_list(std::path::Path::new("features.txt"))?;
//! let cohort = ExpressionCohort::from_tsv(
//!     std::path::Path::new("GBM_RNAseqdata_HTSEQ_FKPM.harmonized.txt"),
//!     &extractor,
//! )?;
//!
//! let clinical = aggregate(
//!     &["clinical_patient_GBM.txt", "clinical_followup_GBM.txt"],
//!     &features,
//!     &AggregateOptions::default(),
//! )?;
//!
//! let valid = join_and_filter(&cohort.patients, &clinical, &features);
//! print!("{}", render_report(&valid, &features));
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod pipeline;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, RunPlan};
    pub use crate::core::{aggregate, aggregate_table, join_and_filter};
    pub use crate::core::{AggregateOptions, BarcodeResolver, ValidPatients};
    pub use crate::data::loaders::load_feature_list;
    pub use crate::data::{ClinicalFeatureMap, ClinicalRow, ClinicalTable, ExpressionCohort};
    pub use crate::data::{PatientKey, PatientKeyExtractor};
    pub use crate::output::{render_report, write_report};
    pub use crate::pipeline::{run, RunOutcome};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, RunPlan};
pub use crate::core::{AggregateOptions, ValidPatients};
pub use crate::data::{ClinicalFeatureMap, ExpressionCohort, PatientKey, PatientKeyExtractor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "clinmatch v{} - TCGA expression/clinical patient matcher",
        VERSION
    )
}
