pub mod credentials;

use crate::adapters::anymailfinder::{DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dm-lookup")]
#[command(about = "Bulk HR decision-maker email lookup via the Anymailfinder API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "hr", help = "Decision-maker category to search for")]
    pub category: String,

    #[arg(long, default_value = "domains.txt", help = "Input file, one domain per line")]
    pub input_file: String,

    #[arg(long, default_value = "hr_emails_results_bulk.csv")]
    pub output_file: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS, help = "Per-request timeout in seconds")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn input_path(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("category", &self.category)?;
        validate_path("input_file", &self.input_file)?;
        validate_path("output_file", &self.output_file)?;
        // An unbounded wait is not allowed; the timeout must be finite and real.
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
