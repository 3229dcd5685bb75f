// validation.rs - Input validation utilities

use crate::cli::args::Args;
use std::path::{Path, PathBuf};

/// Validated inputs for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub features_file: PathBuf,
    pub expression_file: PathBuf,
    pub clinical_files: Vec<PathBuf>,
    pub output_file: PathBuf,
    pub summary_file: Option<PathBuf>,
    pub missing_value: String,
}

fn require_file(path: &Path) -> Result<(), String> {
    if path.is_file() {
        Ok(())
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}

/// Validate all command line arguments.
/// Every input must exist before any file is read.
pub fn validate_args(args: &Args) -> Result<RunPlan, String> {
    let features_file = args
        .features
        .as_ref()
        .map(PathBuf::from)
        .ok_or("features file is required (usage: clinmatch <features_file>)")?;

    if args.missing_value.trim().is_empty() {
        return Err("--missing-value must not be empty".to_string());
    }

    let expression_file = PathBuf::from(&args.expression);
    let clinical_files: Vec<PathBuf> = args.clinical_files().iter().map(PathBuf::from).collect();

    require_file(&features_file)?;
    require_file(&expression_file)?;
    for path in &clinical_files {
        require_file(path)?;
    }

    Ok(RunPlan {
        features_file,
        expression_file,
        clinical_files,
        output_file: PathBuf::from(&args.output),
        summary_file: args.summary.as_ref().map(PathBuf::from),
        missing_value: args.missing_value.clone(),
    })
}
