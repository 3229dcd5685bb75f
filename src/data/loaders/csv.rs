// csv.rs - Clinical table loader

use crate::data::clinical::{ClinicalRow, ClinicalTable};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Unquote a raw field; quotes the parser left behind are stripped as well
fn clean_field(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim_matches('"').to_string()
}

impl ClinicalTable {
    /// Load a comma-delimited clinical file
    pub fn from_csv(file_path: &Path) -> Result<Self, String> {
        let file = File::open(file_path).map_err(|e| {
            format!(
                "Failed to open clinical file '{}': {}",
                file_path.display(),
                e
            )
        })?;

        let mut table = Self::from_reader(file)
            .map_err(|e| format!("{} ({})", e, file_path.display()))?;
        table.source = file_path.display().to_string();

        println!(
            "✅ Clinical table loaded: {} rows, {} columns ({})",
            table.rows.len(),
            table.headers.len(),
            table.source
        );
        Ok(table)
    }

    /// First record is the header; data rows are aligned against it and
    /// never rejected for having the wrong width. Quotes are not interpreted,
    /// so every physical line is one row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, String> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut records = csv_reader.byte_records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record
                .map_err(|e| format!("Failed to read clinical header: {}", e))?
                .iter()
                .map(clean_field)
                .collect(),
            None => return Ok(Self::default()),
        };

        let mut rows = Vec::new();
        for (line_num, record) in records.enumerate() {
            let record = record
                .map_err(|e| format!("Failed to read clinical line {}: {}", line_num + 2, e))?;
            let values: Vec<String> = record.iter().map(clean_field).collect();
            rows.push(ClinicalRow::align(&headers, values));
        }

        Ok(Self {
            source: String::new(),
            headers,
            rows,
        })
    }
}
