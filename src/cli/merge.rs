// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{DEFAULT_EXPRESSION_FILE, DEFAULT_OUTPUT_FILE};
use crate::cli::{Args, Config};
use crate::core::DEFAULT_MISSING_VALUE;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.features.is_none() {
            self.features = config.features;
        }
        if self.clinical.is_empty() {
            if let Some(clinical) = config.clinical {
                self.clinical = clinical;
            }
        }
        if self.summary.is_none() {
            self.summary = config.summary;
        }

        // Only override defaults, not explicit CLI values
        if self.expression == DEFAULT_EXPRESSION_FILE {
            if let Some(expression) = config.expression {
                self.expression = expression;
            }
        }
        if self.output == DEFAULT_OUTPUT_FILE {
            if let Some(output) = config.output {
                self.output = output;
            }
        }
        if self.missing_value == DEFAULT_MISSING_VALUE {
            if let Some(missing_value) = config.missing_value {
                self.missing_value = missing_value;
            }
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
