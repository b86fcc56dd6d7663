use crate::domain::model::Record;
use crate::domain::ports::RowJob;
use crate::transform::{classify, clean_value, TravelType};
use crate::utils::error::Result;

/// Admission columns shared with the extract job, in output order.
const ADMISSION_COLUMNS: [&str; 10] = [
    "ADM_RATE", "SATVR25", "SATVR75", "SATMT25", "SATMT75", "SATVRMID", "SATMTMID", "ACTCM25",
    "ACTCM75", "ACTCMMID",
];

const OUTPUT_COLUMNS: [&str; 15] = [
    "unitid",
    "name",
    "state",
    "travel_type",
    "annual_travel_cost",
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

/// Keeps every row with a non-empty UNITID and annotates it with the travel
/// tier derived from the institution's state.
#[derive(Debug, Default)]
pub struct UpdateFileJob {
    drive_count: u64,
    fly_count: u64,
}

impl RowJob for UpdateFileJob {
    fn name(&self) -> &'static str {
        "generate-update-file"
    }

    fn output_header(&mut self, _input_header: &[String]) -> Result<Vec<String>> {
        Ok(OUTPUT_COLUMNS.iter().map(|c| c.to_string()).collect())
    }

    fn process(&mut self, record: &Record) -> Option<Vec<String>> {
        let unitid = clean_value(record.get("UNITID"));
        if unitid.is_empty() {
            return None;
        }

        let name = clean_value(record.get("INSTNM"));
        let state = clean_value(record.get("STABBR"));

        let travel = classify(state);
        match travel.travel_type {
            TravelType::Drive => self.drive_count += 1,
            TravelType::Fly => self.fly_count += 1,
        }

        let mut values = Vec::with_capacity(OUTPUT_COLUMNS.len());
        values.push(unitid.to_string());
        values.push(name.to_string());
        values.push(state.to_string());
        values.push(travel.travel_type.to_string());
        values.push(travel.annual_cost.to_string());
        for col in ADMISSION_COLUMNS {
            values.push(clean_value(record.get(col)).to_string());
        }

        Some(values)
    }

    fn extra_summary(&self) -> Vec<(String, u64)> {
        vec![
            ("DRIVE schools".to_string(), self.drive_count),
            ("FLY schools".to_string(), self.fly_count),
        ]
    }
}
