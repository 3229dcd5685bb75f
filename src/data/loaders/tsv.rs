// tsv.rs - Expression matrix header loader

use crate::data::expression::ExpressionCohort;
use crate::data::patient::PatientKeyExtractor;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

impl ExpressionCohort {
    /// Load the sample header of a tab-delimited expression matrix
    pub fn from_tsv(file_path: &Path, extractor: &PatientKeyExtractor) -> Result<Self, String> {
        let file = File::open(file_path).map_err(|e| {
            format!(
                "Failed to open expression file '{}': {}",
                file_path.display(),
                e
            )
        })?;

        let cohort = Self::from_reader(file, extractor)
            .map_err(|e| format!("{} ({})", e, file_path.display()))?;

        println!(
            "✅ Expression header loaded: {} samples, {} patients",
            cohort.sample_ids.len(),
            cohort.patients.len()
        );
        Ok(cohort)
    }

    /// Only the first line is read; data rows are never touched
    pub fn from_reader<R: Read>(
        reader: R,
        extractor: &PatientKeyExtractor,
    ) -> Result<Self, String> {
        let mut reader = BufReader::new(reader);
        let mut header_line = String::new();
        reader
            .read_line(&mut header_line)
            .map_err(|e| format!("Failed to read expression header: {}", e))?;

        let mut cohort = Self::new();
        for field in header_line.trim().split('\t') {
            if let Some(patient) = extractor.extract_from_sample(field) {
                cohort.sample_ids.push(field.to_string());
                cohort.patients.insert(patient);
            }
        }

        Ok(cohort)
    }
}
