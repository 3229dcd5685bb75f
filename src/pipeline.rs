// pipeline.rs - One run: load, aggregate, join, report

use crate::cli::RunPlan;
use crate::core::{aggregate, join_and_filter, AggregateOptions, ValidPatients};
use crate::data::loaders::load_feature_list;
use crate::data::{ExpressionCohort, PatientKeyExtractor};
use crate::output::{write_report, write_summary, RunSummary};

/// What a run produced, for callers that want more than the report file
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub features: Vec<String>,
    pub expression_samples: usize,
    pub expression_patients: usize,
    pub clinical_patients: usize,
    pub valid: ValidPatients,
}

pub fn run(plan: &RunPlan) -> Result<RunOutcome, String> {
    let extractor = PatientKeyExtractor::new();

    let features = load_feature_list(&plan.features_file)?;
    println!("🔍 Looking for patients with features: {:?}", features);

    let cohort = ExpressionCohort::from_tsv(&plan.expression_file, &extractor)?;
    println!("📊 Found {} patients in RNA-seq data", cohort.patients.len());

    let options = AggregateOptions::default().with_missing_value(&plan.missing_value);
    let clinical = aggregate(plan.clinical_files.as_slice(), &features, &options)?;
    println!("📊 Found clinical data for {} patients", clinical.len());

    let valid = join_and_filter(&cohort.patients, &clinical, &features);
    if valid.is_empty() {
        println!("⚠️  No patients found with all required features");
    } else {
        println!(
            "✅ Found {} patients with all required features",
            valid.len()
        );
    }

    write_report(&plan.output_file, &valid, &features)?;

    if let Some(summary_file) = &plan.summary_file {
        let summary = RunSummary {
            tool_version: crate::VERSION.to_string(),
            generated: chrono::Utc::now(),
            features: features.clone(),
            expression_file: plan.expression_file.display().to_string(),
            clinical_files: plan
                .clinical_files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            output_file: plan.output_file.display().to_string(),
            expression_samples: cohort.sample_ids.len(),
            expression_patients: cohort.patients.len(),
            clinical_patients: clinical.len(),
            valid_patients: valid.keys().map(|k| k.to_string()).collect(),
        };
        write_summary(summary_file, &summary)?;
    }

    Ok(RunOutcome {
        features,
        expression_samples: cohort.sample_ids.len(),
        expression_patients: cohort.patients.len(),
        clinical_patients: clinical.len(),
        valid,
    })
}
