use crate::domain::model::Record;
use crate::domain::ports::RowJob;
use crate::transform::clean_value;
use crate::utils::error::Result;

/// Scorecard columns to extract, UNITID first.
const COLUMNS_NEEDED: [&str; 11] = [
    "UNITID",
    "ADM_RATE",  // Admission rate
    "SATVR25",   // SAT Reading 25th percentile
    "SATVR75",   // SAT Reading 75th percentile
    "SATMT25",   // SAT Math 25th percentile
    "SATMT75",   // SAT Math 75th percentile
    "SATVRMID",  // SAT Reading midpoint
    "SATMTMID",  // SAT Math midpoint
    "ACTCM25",   // ACT Composite 25th percentile
    "ACTCM75",   // ACT Composite 75th percentile
    "ACTCMMID",  // ACT Composite midpoint
];

/// Output column names, positionally aligned with COLUMNS_NEEDED.
const OUTPUT_COLUMNS: [&str; 11] = [
    "unitid",
    "admission_rate",
    "sat_read_25",
    "sat_read_75",
    "sat_math_25",
    "sat_math_75",
    "sat_read_mid",
    "sat_math_mid",
    "act_25",
    "act_75",
    "act_mid",
];

/// Keeps a row iff UNITID is non-empty and at least one admission field
/// survives cleaning.
#[derive(Debug, Default)]
pub struct AdmissionsJob;

impl RowJob for AdmissionsJob {
    fn name(&self) -> &'static str {
        "extract-admissions"
    }

    fn output_header(&mut self, _input_header: &[String]) -> Result<Vec<String>> {
        Ok(OUTPUT_COLUMNS.iter().map(|c| c.to_string()).collect())
    }

    fn process(&mut self, record: &Record) -> Option<Vec<String>> {
        let values: Vec<String> = COLUMNS_NEEDED
            .iter()
            .map(|col| clean_value(record.get(col)).to_string())
            .collect();

        let has_unitid = !values[0].is_empty();
        let has_data = values[1..].iter().any(|v| !v.is_empty());

        (has_unitid && has_data).then_some(values)
    }
}
