use serde::Serialize;
use std::collections::HashMap;

/// One input row, keyed by column name. Lives only for the duration of
/// processing that row.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub data: HashMap<String, String>,
}

impl Record {
    pub fn from_row(header: &[String], row: &csv::StringRecord) -> Self {
        let data = header
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        Self { data }
    }

    /// Raw value for a column, empty string when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.data.get(column).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub rows_processed: u64,
    pub rows_kept: u64,
    /// Job-specific counters, e.g. the DRIVE/FLY split of the update job.
    pub extra: Vec<(String, u64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_from_row_zips_header_and_values() {
        let header = vec!["UNITID".to_string(), "STABBR".to_string()];
        let row = csv::StringRecord::from(vec!["100654", "AL"]);
        let record = Record::from_row(&header, &row);
        assert_eq!(record.get("UNITID"), "100654");
        assert_eq!(record.get("STABBR"), "AL");
        assert_eq!(record.get("MISSING"), "");
    }

    #[test]
    fn record_tolerates_short_rows() {
        let header = vec!["UNITID".to_string(), "STABBR".to_string()];
        let row = csv::StringRecord::from(vec!["100654"]);
        let record = Record::from_row(&header, &row);
        assert_eq!(record.get("UNITID"), "100654");
        assert_eq!(record.get("STABBR"), "");
    }
}
