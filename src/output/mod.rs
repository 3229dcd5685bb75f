// mod.rs - Report and run summary writers

use crate::core::ValidPatients;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Report body when nobody qualifies
pub const NO_RESULTS_MESSAGE: &str = "No patients found with all required features.";

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!(
                    "Failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }
    Ok(())
}

/// Render the patient-by-feature matrix.
///
/// Header row is `patient ID` followed by the sorted patient keys, then one
/// row per feature in request order, feature name double-quoted, values
/// tab-separated under their patient column.
pub fn render_report(valid: &ValidPatients, features: &[String]) -> String {
    if valid.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let mut report = String::from("patient ID");
    for patient in valid.keys() {
        report.push('\t');
        report.push_str(patient.as_str());
    }
    report.push('\n');

    for feature in features {
        report.push_str(&format!("\"{}\"", feature));
        for patient in valid.keys() {
            report.push('\t');
            report.push_str(valid.value(patient, feature).unwrap_or_default());
        }
        report.push('\n');
    }

    report
}

/// Write the rendered report to disk
pub fn write_report(
    file_path: &Path,
    valid: &ValidPatients,
    features: &[String],
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path).map_err(|e| {
        format!(
            "Failed to create output file '{}': {}",
            file_path.display(),
            e
        )
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(render_report(valid, features).as_bytes())
        .map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    println!("✅ Results written to: {}", file_path.display());
    Ok(())
}

/// Machine-readable record of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool_version: String,
    pub generated: chrono::DateTime<chrono::Utc>,
    pub features: Vec<String>,
    pub expression_file: String,
    pub clinical_files: Vec<String>,
    pub output_file: String,
    pub expression_samples: usize,
    pub expression_patients: usize,
    pub clinical_patients: usize,
    pub valid_patients: Vec<String>,
}

/// Write run summary as pretty-printed JSON
pub fn write_summary(file_path: &Path, summary: &RunSummary) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path).map_err(|e| {
        format!(
            "Failed to create summary file '{}': {}",
            file_path.display(),
            e
        )
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, summary)
        .map_err(|e| format!("Failed to serialize run summary: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    println!("📄 Run summary written to: {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::join_and_filter;
    use crate::data::{ClinicalFeatureMap, PatientKey, PatientKeyExtractor};

    fn key(barcode: &str) -> PatientKey {
        PatientKeyExtractor::new().extract_from_barcode(barcode).unwrap()
    }

    fn features(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_matrix() {
        let mut clinical = ClinicalFeatureMap::new();
        clinical.record(key("TCGA-32-1970"), "gender", "female".to_string());
        clinical.record(key("TCGA-32-1970"), "vital_status", "Dead".to_string());
        clinical.record(key("TCGA-02-0001"), "gender", "male".to_string());
        clinical.record(key("TCGA-02-0001"), "vital_status", "Alive".to_string());
        let wanted = features(&["vital_status", "gender"]);
        let expression = vec![key("TCGA-32-1970"), key("TCGA-02-0001")];

        let valid = join_and_filter(&expression, &clinical, &wanted);

        assert_eq!(
            render_report(&valid, &wanted),
            "patient ID\t02-0001\t32-1970\n\
             \"vital_status\"\tAlive\tDead\n\
             \"gender\"\tmale\tfemale\n"
        );
    }

    #[test]
    fn test_render_no_results() {
        let valid = ValidPatients::default();
        assert_eq!(
            render_report(&valid, &features(&["gender"])),
            "No patients found with all required features.\n"
        );
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.txt");

        write_report(&path, &ValidPatients::default(), &features(&["gender"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}\n", NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_write_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let summary = RunSummary {
            tool_version: "0.1.0".to_string(),
            generated: chrono::Utc::now(),
            features: features(&["gender"]),
            expression_file: "expr.txt".to_string(),
            clinical_files: vec!["clinical.txt".to_string()],
            output_file: "out.txt".to_string(),
            expression_samples: 3,
            expression_patients: 2,
            clinical_patients: 2,
            valid_patients: vec!["12-3456".to_string()],
        };

        write_summary(&path, &summary).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["expression_patients"], 2);
        assert_eq!(json["valid_patients"][0], "12-3456");
        assert_eq!(json["features"][0], "gender");
    }
}
