use crate::domain::model::Record;
use crate::utils::error::Result;
use std::io::{Read, Write};

pub trait Storage: Send + Sync {
    fn open_input(&self, path: &str) -> Result<Box<dyn Read + Send>>;
    fn create_output(&self, path: &str) -> Result<Box<dyn Write + Send>>;
}

pub trait JobConfig: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn progress_interval(&self) -> u64;
}

/// One streaming extraction job: fixed output schema, per-row keep/drop
/// decision, optional job-specific counters for the final summary.
pub trait RowJob: Send {
    fn name(&self) -> &'static str;

    /// Called once with the input header (BOM already stripped); returns the
    /// output header to write.
    fn output_header(&mut self, input_header: &[String]) -> Result<Vec<String>>;

    /// Returns the output row for a kept record, `None` to drop it.
    fn process(&mut self, record: &Record) -> Option<Vec<String>>;

    fn extra_summary(&self) -> Vec<(String, u64)> {
        Vec::new()
    }
}
