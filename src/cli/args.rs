// args.rs - Command line arguments definition

use crate::core::DEFAULT_MISSING_VALUE;
use argh::FromArgs;

pub const DEFAULT_EXPRESSION_FILE: &str = "GBM_RNAseqdata_HTSEQ_FKPM.harmonized.txt";
pub const DEFAULT_CLINICAL_FILES: [&str; 3] = [
    "clinical_patient_GBM.txt",
    "clinical_followup_GBM.txt",
    "clinical_drug_GBM.txt",
];
pub const DEFAULT_OUTPUT_FILE: &str = "patient_analysis_results.txt";

#[derive(FromArgs, Debug)]
/// clinmatch - find expression-profiled patients with complete clinical features
pub struct Args {
    /// file listing the required clinical features (one per line)
    #[argh(positional)]
    pub features: Option<String>,

    /// tab-delimited expression matrix whose header holds sample identifiers
    #[argh(option, default = "String::from(DEFAULT_EXPRESSION_FILE)")]
    pub expression: String,

    /// comma-delimited clinical file; repeat to give several, later files win (default: the three GBM clinical files)
    #[argh(option)]
    pub clinical: Vec<String>,

    /// output report file (default: patient_analysis_results.txt)
    #[argh(option, default = "String::from(DEFAULT_OUTPUT_FILE)")]
    pub output: String,

    /// literal marking a missing clinical value (default: NA)
    #[argh(option, default = "String::from(DEFAULT_MISSING_VALUE)")]
    pub missing_value: String,

    /// write a JSON run summary to this file
    #[argh(option)]
    pub summary: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// validate inputs without reading data files (dry run)
    #[argh(switch)]
    pub dry_run: bool,
}

impl Args {
    /// Clinical files in processing order, falling back to the GBM defaults
    pub fn clinical_files(&self) -> Vec<String> {
        if self.clinical.is_empty() {
            DEFAULT_CLINICAL_FILES.iter().map(|s| s.to_string()).collect()
        } else {
            self.clinical.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["clinmatch"], args)
    }

    #[test]
    fn test_single_positional_uses_fixed_paths() {
        let args = parse(&["features.txt"]).unwrap();

        assert_eq!(args.features.as_deref(), Some("features.txt"));
        assert_eq!(args.expression, DEFAULT_EXPRESSION_FILE);
        assert_eq!(args.output, DEFAULT_OUTPUT_FILE);
        assert_eq!(args.missing_value, "NA");
        assert_eq!(args.clinical_files(), DEFAULT_CLINICAL_FILES.to_vec());
    }

    #[test]
    fn test_repeated_clinical_keeps_order() {
        let args = parse(&["features.txt", "--clinical", "b.txt", "--clinical", "a.txt"]).unwrap();
        assert_eq!(args.clinical_files(), vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn test_generate_config_without_features() {
        let args = parse(&["--generate-config"]).unwrap();
        assert!(args.generate_config);
        assert!(args.features.is_none());
    }
}
