// clinical.rs - Clinical record rows and the per-patient feature map

use crate::data::patient::PatientKey;
use std::collections::HashMap;

/// One parsed data row, fields paired with their header in header order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClinicalRow {
    pub fields: Vec<(String, String)>,
}

impl ClinicalRow {
    /// Pair values with headers positionally, truncating to the shorter side.
    /// A row wider than the header loses its first field (unlabeled index column).
    pub fn align(headers: &[String], mut values: Vec<String>) -> Self {
        if values.len() > headers.len() {
            values.remove(0);
        }

        let fields = headers.iter().cloned().zip(values).collect();
        Self { fields }
    }

    /// Value of the column with this header; with duplicate headers the last one wins
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }

    /// Values in header order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }
}

/// A clinical source file: header plus aligned rows
#[derive(Debug, Clone, Default)]
pub struct ClinicalTable {
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<ClinicalRow>,
}

/// Per-patient feature values merged across all clinical sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClinicalFeatureMap {
    patients: HashMap<PatientKey, HashMap<String, String>>,
}

impl ClinicalFeatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing whatever an earlier source recorded
    pub fn record(&mut self, patient: PatientKey, feature: &str, value: String) {
        self.patients
            .entry(patient)
            .or_default()
            .insert(feature.to_string(), value);
    }

    pub fn features_for(&self, patient: &PatientKey) -> Option<&HashMap<String, String>> {
        self.patients.get(patient)
    }

    pub fn value(&self, patient: &PatientKey, feature: &str) -> Option<&str> {
        self.patients
            .get(patient)
            .and_then(|features| features.get(feature))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
