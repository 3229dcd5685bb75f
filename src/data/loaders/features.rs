// features.rs - Requested feature list loader

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load feature names (one per line, optionally quoted) preserving file order
pub fn load_feature_list(file_path: &Path) -> Result<Vec<String>, String> {
    let file = File::open(file_path).map_err(|e| {
        format!(
            "Failed to open features file '{}': {}",
            file_path.display(),
            e
        )
    })?;

    let features = read_feature_list(file)
        .map_err(|e| format!("{} ({})", e, file_path.display()))?;

    println!(
        "📋 Loaded {} features from '{}'",
        features.len(),
        file_path.display()
    );
    Ok(features)
}

pub fn read_feature_list<R: Read>(reader: R) -> Result<Vec<String>, String> {
    let reader = BufReader::new(reader);
    let mut features = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        let feature = line.trim().trim_matches('"');
        if !feature.is_empty() {
            features.push(feature.to_string());
        }
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_and_blank_lines() {
        let data = "\"gender\"\n\n  vital_status  \n\"\"\nage_at_initial_pathologic_diagnosis\r\n";
        let features = read_feature_list(data.as_bytes()).unwrap();
        assert_eq!(
            features,
            vec![
                "gender".to_string(),
                "vital_status".to_string(),
                "age_at_initial_pathologic_diagnosis".to_string(),
            ]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let features = read_feature_list("b\na\nc\n".as_bytes()).unwrap();
        assert_eq!(features, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_feature_list(Path::new("/nonexistent/features.txt")).unwrap_err();
        assert!(err.contains("Failed to open features file"));
    }
}
