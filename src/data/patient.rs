// patient.rs - Patient keys and TCGA identifier parsing

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Project code every sample identifier and patient barcode starts with
pub const PROJECT_PREFIX: &str = "TCGA";

/// Canonical patient identity, e.g. `28-2513` for `TCGA-28-2513-01A-01R-1850-01`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientKey(String);

impl PatientKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PatientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives patient keys from sample identifiers and patient barcodes.
///
/// Both forms agree on the key for the same patient:
/// `TCGA-12-3456-01A-...` (sample) and `TCGA-12-3456` (barcode) give `12-3456`.
#[derive(Debug, Clone)]
pub struct PatientKeyExtractor {
    sample_pattern: Regex,
    barcode_prefix: String,
}

impl Default for PatientKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientKeyExtractor {
    pub fn new() -> Self {
        let sample_pattern = Regex::new(&format!(r"^{}-(\d+)-(\d+)", PROJECT_PREFIX))
            .expect("sample identifier pattern is a valid regex");

        Self {
            sample_pattern,
            barcode_prefix: format!("{}-", PROJECT_PREFIX),
        }
    }

    /// Sample form: the two numeric groups after the project prefix.
    /// Anchored at the start, trailing content is ignored.
    pub fn extract_from_sample(&self, identifier: &str) -> Option<PatientKey> {
        let caps = self.sample_pattern.captures(identifier)?;
        Some(PatientKey(format!("{}-{}", &caps[1], &caps[2])))
    }

    /// Barcode form: everything after the leading `TCGA-` token
    pub fn extract_from_barcode(&self, barcode: &str) -> Option<PatientKey> {
        let rest = barcode.strip_prefix(&self.barcode_prefix)?;
        if rest.is_empty() {
            return None;
        }
        Some(PatientKey(rest.to_string()))
    }

    /// True if the value looks like a TCGA barcode (prefix plus hyphen)
    pub fn is_barcode(&self, value: &str) -> bool {
        value.starts_with(&self.barcode_prefix)
    }
}
