// expression.rs - Patients covered by the expression matrix

use crate::data::patient::PatientKey;
use std::collections::BTreeSet;

/// Sample columns of an expression matrix and the patients behind them
#[derive(Debug, Clone, Default)]
pub struct ExpressionCohort {
    /// Header fields recognised as sample identifiers, in file order
    pub sample_ids: Vec<String>,
    pub patients: BTreeSet<PatientKey>,
}

impl ExpressionCohort {
    pub fn new() -> Self {
        Self::default()
    }
}
