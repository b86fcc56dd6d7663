use crate::domain::model::Record;
use crate::domain::ports::RowJob;
use crate::transform::clean_value;
use crate::utils::error::{EtlError, Result};

const MIN_ENROLLMENT: f64 = 100.0;

/// Columns carried through when present in the input. The output schema is
/// the intersection of this list with the actual input header, in this order.
const COLUMNS_NEEDED: [&str; 37] = [
    "UNITID",
    "INSTNM",
    "CITY",
    "STABBR",
    "CONTROL",
    "UGDS",
    "INSTURL",
    "NPCURL",
    "COSTT4_A",
    "TUITIONFEE_IN",
    "TUITIONFEE_OUT",
    "ROOMBOARD_ON",
    "BOOKSUPPLY",
    "NPT4_PUB",
    "NPT4_PRIV",
    "NPT41_PUB",
    "NPT42_PUB",
    "NPT43_PUB",
    "NPT44_PUB",
    "NPT45_PUB",
    "NPT41_PRIV",
    "NPT42_PRIV",
    "NPT43_PRIV",
    "NPT44_PRIV",
    "NPT45_PRIV",
    "PCTFLOAN",
    "DEBT_MDN",
    "C150_4",
    "C150_4_PELL",
    "CDR3",
    "MD_EARN_WNE_P10",
    "ENDOWMENT",
    "LATITUDE",
    "LONGITUDE",
    "ICLEVEL",
    "PREDDEG",
    "HIGHDEG",
];

/// Keeps two- and four-year public/private non-profit institutions with at
/// least 100 undergraduates.
#[derive(Debug, Default)]
pub struct CollegeFilterJob {
    available: Vec<String>,
}

impl RowJob for CollegeFilterJob {
    fn name(&self) -> &'static str {
        "filter-colleges"
    }

    fn output_header(&mut self, input_header: &[String]) -> Result<Vec<String>> {
        self.available = COLUMNS_NEEDED
            .iter()
            .filter(|col| input_header.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect();

        if self.available.is_empty() {
            return Err(EtlError::ProcessingError {
                message: "Input header contains none of the expected institution columns"
                    .to_string(),
            });
        }

        Ok(self.available.clone())
    }

    fn process(&mut self, record: &Record) -> Option<Vec<String>> {
        // CONTROL 3 = private for-profit, excluded
        if record.get("CONTROL") == "3" {
            return None;
        }

        // ICLEVEL 1 = four-year, 2 = two-year
        if !matches!(record.get("ICLEVEL"), "1" | "2") {
            return None;
        }

        let ugds = record.get("UGDS");
        if clean_value(ugds).is_empty() {
            return None;
        }

        // A malformed enrollment value skips the row, nothing else does
        match ugds.parse::<f64>() {
            Ok(enrollment) if enrollment >= MIN_ENROLLMENT => {}
            _ => return None,
        }

        Some(
            self.available
                .iter()
                .map(|col| record.get(col).to_string())
                .collect(),
        )
    }
}
