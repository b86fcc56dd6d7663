/// Markers the College Scorecard export uses for missing or suppressed data.
const SENTINELS: [&str; 5] = ["NULL", "PrivacySuppressed", "NA", "PS", ""];

/// Maps sentinel values to the empty string, leaves everything else unchanged.
pub fn clean_value(value: &str) -> &str {
    if SENTINELS.contains(&value) {
        ""
    } else {
        value
    }
}
