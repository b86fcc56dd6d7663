use crate::domain::ports::JobConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_csv_extension, validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "extract-admissions")]
#[command(about = "Extract admission statistics from a College Scorecard export")]
pub struct AdmissionsConfig {
    /// Merged College Scorecard export to read
    #[arg(long, default_value = "MERGED2023_24_PP.csv")]
    pub input: String,

    /// Output CSV for database import
    #[arg(long, default_value = "admission_data.csv")]
    pub output: String,

    /// Log a progress line every N rows
    #[arg(long, default_value = "1000")]
    pub progress_interval: u64,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log CPU/memory usage alongside progress
    #[arg(long)]
    pub monitor: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "filter-colleges")]
#[command(about = "Filter a College Scorecard institution file down to importable colleges")]
pub struct CollegesConfig {
    /// Institution-level Scorecard export to read (may carry a UTF-8 BOM)
    #[arg(long, default_value = "Most-Recent-Cohorts-Institution.csv")]
    pub input: String,

    /// Output CSV for database import
    #[arg(long, default_value = "crown_hub_colleges.csv")]
    pub output: String,

    /// Log a progress line every N rows
    #[arg(long, default_value = "1000")]
    pub progress_interval: u64,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log CPU/memory usage alongside progress
    #[arg(long)]
    pub monitor: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "generate-update-file")]
#[command(about = "Generate a schools update CSV with travel-cost annotations")]
pub struct UpdateFileConfig {
    /// Merged College Scorecard export to read
    #[arg(long, default_value = "MERGED2023_24_PP.csv")]
    pub input: String,

    /// Output CSV for the schools table update
    #[arg(long, default_value = "schools_update.csv")]
    pub output: String,

    /// Log a progress line every N rows
    #[arg(long, default_value = "1000")]
    pub progress_interval: u64,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log CPU/memory usage alongside progress
    #[arg(long)]
    pub monitor: bool,
}

macro_rules! impl_job_config {
    ($($config:ty),+) => {
        $(
            impl JobConfig for $config {
                fn input_path(&self) -> &str {
                    &self.input
                }

                fn output_path(&self) -> &str {
                    &self.output
                }

                fn progress_interval(&self) -> u64 {
                    self.progress_interval
                }
            }

            impl Validate for $config {
                fn validate(&self) -> Result<()> {
                    validate_path("input", &self.input)?;
                    validate_path("output", &self.output)?;
                    validate_csv_extension("input", &self.input)?;
                    validate_csv_extension("output", &self.output)?;
                    validate_positive_number("progress_interval", self.progress_interval, 1)?;
                    Ok(())
                }
            }
        )+
    };
}

impl_job_config!(AdmissionsConfig, CollegesConfig, UpdateFileConfig);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_validate() {
        let config = AdmissionsConfig::parse_from(["extract-admissions"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.input_path(), "MERGED2023_24_PP.csv");
        assert_eq!(config.output_path(), "admission_data.csv");
        assert_eq!(config.progress_interval(), 1000);
    }

    #[test]
    fn rejects_non_csv_input() {
        let config =
            CollegesConfig::parse_from(["filter-colleges", "--input", "institutions.parquet"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_progress_interval() {
        let config =
            UpdateFileConfig::parse_from(["generate-update-file", "--progress-interval", "0"]);
        assert!(config.validate().is_err());
    }
}
