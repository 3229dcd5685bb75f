// config.rs - Configuration file support

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    // Input/Output
    pub features: Option<String>,
    pub expression: Option<String>,
    pub clinical: Option<Vec<String>>,
    pub output: Option<String>,
    pub summary: Option<String>,

    // Clinical parsing
    pub missing_value: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# clinmatch.toml - Configuration file for clinmatch
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Required clinical features, one per line
features = "features.txt"

# Tab-delimited expression matrix; sample identifiers are read from the header
expression = "GBM_RNAseqdata_HTSEQ_FKPM.harmonized.txt"

# Comma-delimited clinical files, processed in order (later files win)
clinical = [
    "clinical_patient_GBM.txt",
    "clinical_followup_GBM.txt",
    "clinical_drug_GBM.txt",
]

# Output report
output = "patient_analysis_results.txt"

# JSON run summary (optional)
# summary = "run_summary.json"

# =============================================================================
# CLINICAL PARSING
# =============================================================================

# Literal marking a missing clinical value
missing_value = "NA"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();

        assert_eq!(config.features.as_deref(), Some("features.txt"));
        assert_eq!(config.clinical.as_ref().map(Vec::len), Some(3));
        assert_eq!(config.missing_value.as_deref(), Some("NA"));
        assert!(config.summary.is_none());
    }

    #[test]
    fn test_config_file_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinmatch.toml");
        std::fs::write(&path, "output = \"out.txt\"\nclinical = [\"a.txt\"]\n").unwrap();

        let expected = Config {
            output: Some("out.txt".to_string()),
            clinical: Some(vec!["a.txt".to_string()]),
            ..Config::new()
        };
        assert_eq!(Config::from_file(&path).unwrap(), expected);
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "clinical = \"not a list\"").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
    }
}
