//! Fare calculation.
//!
//! Distance-banded adult fares per mode, with child and senior concessions
//! and the airport station access fee. Amounts are exact decimals.

mod calculate;
mod error;
mod table;

pub use calculate::{
    FareBreakdown, FareRequest, InvalidRiderCategory, RiderCategory, airport_surcharge,
    calculate_fare, senior_cap,
};
pub use error::FareError;
pub use table::{DistanceBand, FARE_TABLES, FareTable, fare_table};
