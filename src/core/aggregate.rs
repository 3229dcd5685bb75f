// aggregate.rs - Merge requested clinical features across source files

use crate::data::{ClinicalFeatureMap, ClinicalRow, ClinicalTable, PatientKeyExtractor};
use std::path::Path;

/// Columns checked for a patient barcode before scanning the whole row
pub const PREFERRED_BARCODE_COLUMNS: [&str; 2] = ["bcr_patient_barcode", "additional_studies"];

/// Default literal marking a missing clinical value
pub const DEFAULT_MISSING_VALUE: &str = "NA";

/// Finds the patient barcode of a clinical row.
///
/// Preferred columns are checked in order; failing those, the first value in
/// header order that looks like a barcode is used.
#[derive(Debug, Clone)]
pub struct BarcodeResolver {
    preferred_columns: Vec<String>,
}

impl Default for BarcodeResolver {
    fn default() -> Self {
        Self::new(PREFERRED_BARCODE_COLUMNS.iter().map(|c| c.to_string()).collect())
    }
}

impl BarcodeResolver {
    pub fn new(preferred_columns: Vec<String>) -> Self {
        Self { preferred_columns }
    }

    pub fn resolve<'a>(
        &self,
        row: &'a ClinicalRow,
        extractor: &PatientKeyExtractor,
    ) -> Option<&'a str> {
        self.preferred_columns
            .iter()
            .filter_map(|column| row.get(column))
            .find(|value| extractor.is_barcode(value))
            .or_else(|| row.values().find(|value| extractor.is_barcode(value)))
    }
}

/// Settings shared by every aggregation call
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    pub missing_value: String,
    pub resolver: BarcodeResolver,
    pub extractor: PatientKeyExtractor,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            missing_value: DEFAULT_MISSING_VALUE.to_string(),
            resolver: BarcodeResolver::default(),
            extractor: PatientKeyExtractor::new(),
        }
    }
}

impl AggregateOptions {
    pub fn with_missing_value(mut self, missing_value: &str) -> Self {
        self.missing_value = missing_value.to_string();
        self
    }

    /// Trimmed value if it counts as present
    fn accept<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let value = raw.trim();
        if value.is_empty() || value == self.missing_value {
            None
        } else {
            Some(value)
        }
    }
}

/// Row-level counters for one table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateStats {
    pub rows_read: usize,
    pub rows_without_barcode: usize,
    pub values_accepted: usize,
}

/// Fold one table into the map. Later accepted values overwrite earlier ones;
/// empty or missing values never erase what is already there.
pub fn aggregate_table(
    mut map: ClinicalFeatureMap,
    table: &ClinicalTable,
    features: &[String],
    options: &AggregateOptions,
) -> (ClinicalFeatureMap, AggregateStats) {
    let mut stats = AggregateStats::default();

    for row in &table.rows {
        stats.rows_read += 1;

        let patient = options
            .resolver
            .resolve(row, &options.extractor)
            .and_then(|barcode| options.extractor.extract_from_barcode(barcode));

        let Some(patient) = patient else {
            stats.rows_without_barcode += 1;
            continue;
        };

        for feature in features {
            if let Some(value) = row.get(feature).and_then(|raw| options.accept(raw)) {
                map.record(patient.clone(), feature, value.to_string());
                stats.values_accepted += 1;
            }
        }
    }

    (map, stats)
}

/// Aggregate clinical files in call order; the last file with a value wins
pub fn aggregate<P: AsRef<Path>>(
    files: &[P],
    features: &[String],
    options: &AggregateOptions,
) -> Result<ClinicalFeatureMap, String> {
    let mut map = ClinicalFeatureMap::new();

    for path in files {
        let table = ClinicalTable::from_csv(path.as_ref())?;
        let (next, stats) = aggregate_table(map, &table, features, options);
        map = next;

        if stats.rows_without_barcode > 0 {
            println!(
                "   ⚠️  {} of {} rows without a patient barcode skipped",
                stats.rows_without_barcode, stats.rows_read
            );
        }
    }

    Ok(map)
}
