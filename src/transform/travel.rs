use std::fmt;

// Travel tiers from the Poconos, PA:
//   close drive  $600/year (5 trips), medium drive $1,000/year,
//   far drive $1,500/year, fly $2,500/year for everything else.
pub const CLOSE_DRIVE_STATES: [&str; 3] = ["PA", "NJ", "DE"];
pub const MEDIUM_DRIVE_STATES: [&str; 4] = ["NY", "CT", "MD", "DC"];
pub const FAR_DRIVE_STATES: [&str; 7] = ["MA", "RI", "VA", "WV", "VT", "NH", "ME"];

pub const CLOSE_DRIVE_COST: u32 = 600;
pub const MEDIUM_DRIVE_COST: u32 = 1_000;
pub const FAR_DRIVE_COST: u32 = 1_500;
pub const FLY_COST: u32 = 2_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelType {
    Drive,
    Fly,
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelType::Drive => write!(f, "DRIVE"),
            TravelType::Fly => write!(f, "FLY"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelInfo {
    pub travel_type: TravelType,
    pub annual_cost: u32,
}

/// Classifies a state abbreviation into a travel tier. Unknown or empty
/// states fall into the FLY default; never fails.
pub fn classify(state: &str) -> TravelInfo {
    let state = state.trim().to_uppercase();
    let state = state.as_str();

    if CLOSE_DRIVE_STATES.contains(&state) {
        TravelInfo {
            travel_type: TravelType::Drive,
            annual_cost: CLOSE_DRIVE_COST,
        }
    } else if MEDIUM_DRIVE_STATES.contains(&state) {
        TravelInfo {
            travel_type: TravelType::Drive,
            annual_cost: MEDIUM_DRIVE_COST,
        }
    } else if FAR_DRIVE_STATES.contains(&state) {
        TravelInfo {
            travel_type: TravelType::Drive,
            annual_cost: FAR_DRIVE_COST,
        }
    } else {
        TravelInfo {
            travel_type: TravelType::Fly,
            annual_cost: FLY_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_tiers() {
        for state in CLOSE_DRIVE_STATES {
            let info = classify(state);
            assert_eq!(info.travel_type, TravelType::Drive);
            assert_eq!(info.annual_cost, 600);
        }
        for state in MEDIUM_DRIVE_STATES {
            assert_eq!(classify(state).annual_cost, 1000);
        }
        for state in FAR_DRIVE_STATES {
            assert_eq!(classify(state).annual_cost, 1500);
        }
    }

    #[test]
    fn everything_else_flies() {
        for state in ["CA", "TX", "AK", "HI", "PR", "XX", ""] {
            let info = classify(state);
            assert_eq!(info.travel_type, TravelType::Fly);
            assert_eq!(info.annual_cost, 2500);
        }
    }

    #[test]
    fn state_is_normalized_before_lookup() {
        let info = classify("pa ");
        assert_eq!(info.travel_type, TravelType::Drive);
        assert_eq!(info.annual_cost, 600);
        assert_eq!(classify(" ny").annual_cost, 1000);
    }
}
