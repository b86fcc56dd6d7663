pub mod clean;
pub mod travel;

pub use clean::clean_value;
pub use travel::{classify, TravelInfo, TravelType};
