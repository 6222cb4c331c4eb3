//! Fare calculation.
//!
//! Pure functions over the fare tables. A fare is the adult band fare,
//! reduced for the rider category, capped for seniors, plus the airport
//! station access fee when the trip touches an airport station.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::FareError;
use super::table::{cents, fare_table};
use crate::domain::TransportMode;

/// Senior fares never exceed this amount (before any airport fee).
pub fn senior_cap() -> Decimal {
    cents(250)
}

/// Airport station access fee for the category.
pub fn airport_surcharge(category: RiderCategory) -> Decimal {
    match category {
        RiderCategory::Adult => cents(1734),
        RiderCategory::Child | RiderCategory::Senior => cents(1550),
    }
}

/// Who is travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiderCategory {
    Adult,
    Child,
    Senior,
}

impl RiderCategory {
    pub const ALL: [RiderCategory; 3] = [
        RiderCategory::Adult,
        RiderCategory::Child,
        RiderCategory::Senior,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RiderCategory::Adult => "Adult",
            RiderCategory::Child => "Child",
            RiderCategory::Senior => "Senior",
        }
    }
}

impl fmt::Display for RiderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a rider category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rider category: {0}")]
pub struct InvalidRiderCategory(pub String);

impl FromStr for RiderCategory {
    type Err = InvalidRiderCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" => Ok(RiderCategory::Adult),
            "child" => Ok(RiderCategory::Child),
            "senior" => Ok(RiderCategory::Senior),
            _ => Err(InvalidRiderCategory(s.to_string())),
        }
    }
}

/// Inputs to a fare calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareRequest {
    pub category: RiderCategory,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub is_peak: bool,
    /// Accepted for completeness; no weekend rate is applied.
    pub is_weekend: bool,
    pub includes_airport: bool,
}

/// How a fare was arrived at.
#[derive(Debug, Clone, PartialEq)]
pub struct FareBreakdown {
    pub request: FareRequest,

    /// Fare table the band came from, e.g. "rail"
    pub table: &'static str,

    /// Adult fare for the band and time of day
    pub base_fare: Decimal,

    /// Fare for the rider category, after any cap
    pub category_fare: Decimal,

    /// Cap that reduced the category fare, if it did
    pub cap: Option<Decimal>,

    /// Airport access fee, if charged
    pub airport_surcharge: Option<Decimal>,

    pub total: Decimal,
}

/// Half the adult fare, rounded down to the cent.
fn half_fare(adult: Decimal) -> Decimal {
    (adult / Decimal::TWO).round_dp_with_strategy(2, RoundingStrategy::ToZero)
}

impl FareRequest {
    /// Calculate the fare for this request.
    pub fn calculate(&self) -> Result<FareBreakdown, FareError> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(FareError::InvalidDistance(self.distance_km));
        }

        let table = fare_table(self.mode).ok_or(FareError::UnsupportedFareTier {
            mode: self.mode,
            reason: "no fare table for this mode",
        })?;

        // Every table starts at zero and ends open, so a valid distance
        // always has a band.
        let band = table
            .band(self.distance_km)
            .ok_or(FareError::InvalidDistance(self.distance_km))?;

        let base_fare = band
            .adult_fare(self.is_peak)
            .ok_or(FareError::UnsupportedFareTier {
                mode: self.mode,
                reason: "no off-peak fare published",
            })?;

        let (category_fare, cap) = match self.category {
            RiderCategory::Adult => (base_fare, None),
            RiderCategory::Child => (half_fare(base_fare), None),
            RiderCategory::Senior => {
                let concession = half_fare(base_fare);
                let cap = senior_cap();
                if concession > cap {
                    (cap, Some(cap))
                } else {
                    (concession, None)
                }
            }
        };

        let surcharge = self
            .includes_airport
            .then(|| airport_surcharge(self.category));

        let total = (category_fare + surcharge.unwrap_or_default()).round_dp(2);

        Ok(FareBreakdown {
            request: *self,
            table: table.name,
            base_fare,
            category_fare,
            cap,
            airport_surcharge: surcharge,
            total,
        })
    }
}

/// Calculate a fare.
pub fn calculate_fare(
    category: RiderCategory,
    mode: TransportMode,
    distance_km: f64,
    is_peak: bool,
    is_weekend: bool,
    includes_airport: bool,
) -> Result<FareBreakdown, FareError> {
    FareRequest {
        category,
        mode,
        distance_km,
        is_peak,
        is_weekend,
        includes_airport,
    }
    .calculate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn total(
        category: RiderCategory,
        mode: TransportMode,
        distance_km: f64,
        is_peak: bool,
        includes_airport: bool,
    ) -> Decimal {
        calculate_fare(category, mode, distance_km, is_peak, false, includes_airport)
            .unwrap()
            .total
    }

    #[test]
    fn adult_train_peak() {
        let fare = calculate_fare(
            RiderCategory::Adult,
            TransportMode::Train,
            8.0,
            true,
            false,
            false,
        )
        .unwrap();

        assert_eq!(fare.table, "rail");
        assert_eq!(fare.base_fare, dec!(4.20));
        assert_eq!(fare.category_fare, dec!(4.20));
        assert_eq!(fare.cap, None);
        assert_eq!(fare.airport_surcharge, None);
        assert_eq!(fare.total, dec!(4.20));
    }

    #[test]
    fn child_metro_off_peak_is_half() {
        let fare = calculate_fare(
            RiderCategory::Child,
            TransportMode::Metro,
            12.0,
            false,
            false,
            false,
        )
        .unwrap();

        assert_eq!(fare.base_fare, dec!(3.65));
        assert_eq!(fare.total, dec!(1.82));
    }

    #[test]
    fn child_bus_off_peak() {
        let fare = calculate_fare(
            RiderCategory::Child,
            TransportMode::Bus,
            10.0,
            false,
            false,
            false,
        )
        .unwrap();

        assert_eq!(fare.table, "bus");
        assert_eq!(fare.base_fare, dec!(3.92));
        assert_eq!(fare.total, dec!(1.96));
    }

    #[test]
    fn senior_ferry_peak_is_capped() {
        let fare = calculate_fare(
            RiderCategory::Senior,
            TransportMode::Ferry,
            15.0,
            true,
            false,
            false,
        )
        .unwrap();

        assert_eq!(fare.table, "ferry");
        assert_eq!(fare.base_fare, dec!(8.92));
        assert_eq!(fare.cap, Some(dec!(2.50)));
        assert_eq!(fare.total, dec!(2.50));
    }

    #[test]
    fn adult_train_peak_with_airport() {
        let fare = calculate_fare(
            RiderCategory::Adult,
            TransportMode::Train,
            8.0,
            true,
            false,
            true,
        )
        .unwrap();

        assert_eq!(fare.base_fare, dec!(4.20));
        assert_eq!(fare.airport_surcharge, Some(dec!(17.34)));
        assert_eq!(fare.total, dec!(21.54));
    }

    #[test]
    fn child_fares_round_down() {
        let train = TransportMode::Train;
        assert_eq!(total(RiderCategory::Child, train, 5.0, true, false), dec!(2.10));
        assert_eq!(total(RiderCategory::Child, train, 25.0, true, false), dec!(3.00));
        assert_eq!(total(RiderCategory::Child, train, 40.0, true, false), dec!(4.01));
        assert_eq!(total(RiderCategory::Child, train, 80.0, true, false), dec!(5.16));
        assert_eq!(
            total(RiderCategory::Child, TransportMode::Bus, 1.0, false, false),
            dec!(1.12)
        );
    }

    #[test]
    fn senior_fare_is_capped() {
        let fare = calculate_fare(
            RiderCategory::Senior,
            TransportMode::Train,
            70.0,
            true,
            false,
            false,
        )
        .unwrap();

        assert_eq!(fare.base_fare, dec!(10.33));
        assert_eq!(fare.category_fare, dec!(2.50));
        assert_eq!(fare.cap, Some(dec!(2.50)));
        assert_eq!(fare.total, dec!(2.50));
    }

    #[test]
    fn senior_fare_below_cap_is_child_fare() {
        let fare = calculate_fare(
            RiderCategory::Senior,
            TransportMode::Bus,
            2.0,
            false,
            false,
            false,
        )
        .unwrap();

        assert_eq!(fare.total, dec!(1.12));
        assert_eq!(fare.cap, None);
    }

    #[test]
    fn airport_surcharge_is_added() {
        let fare = calculate_fare(
            RiderCategory::Adult,
            TransportMode::Train,
            15.0,
            true,
            false,
            true,
        )
        .unwrap();

        assert_eq!(fare.airport_surcharge, Some(dec!(17.34)));
        assert_eq!(fare.total, dec!(22.56));

        assert_eq!(
            total(RiderCategory::Child, TransportMode::Train, 5.0, true, true),
            dec!(17.60)
        );
        assert_eq!(
            total(RiderCategory::Senior, TransportMode::Train, 70.0, true, true),
            dec!(18.00)
        );
    }

    #[test]
    fn band_boundaries() {
        let adult = RiderCategory::Adult;
        assert_eq!(total(adult, TransportMode::Train, 0.0, true, false), dec!(4.20));
        assert_eq!(total(adult, TransportMode::Train, 10.0, true, false), dec!(5.22));
        assert_eq!(total(adult, TransportMode::Train, 65.0, false, false), dec!(7.23));
        assert_eq!(total(adult, TransportMode::Bus, 3.0, true, false), dec!(4.36));
        assert_eq!(total(adult, TransportMode::Bus, 8.0, true, false), dec!(5.60));
        assert_eq!(total(adult, TransportMode::Ferry, 8.9, true, false), dec!(7.13));
        assert_eq!(total(adult, TransportMode::Ferry, 9.0, true, false), dec!(8.92));
    }

    #[test]
    fn weekend_flag_does_not_change_fare() {
        let weekday = calculate_fare(
            RiderCategory::Adult,
            TransportMode::Bus,
            4.0,
            true,
            false,
            false,
        )
        .unwrap();
        let weekend = calculate_fare(
            RiderCategory::Adult,
            TransportMode::Bus,
            4.0,
            true,
            true,
            false,
        )
        .unwrap();

        assert_eq!(weekday.total, weekend.total);
    }

    #[test]
    fn unsupported_modes() {
        for mode in [TransportMode::LightRail, TransportMode::Coach] {
            let err = calculate_fare(RiderCategory::Adult, mode, 5.0, true, false, false)
                .unwrap_err();
            assert!(matches!(err, FareError::UnsupportedFareTier { mode: m, .. } if m == mode));
        }
    }

    #[test]
    fn ferry_off_peak_is_unsupported() {
        let err = calculate_fare(
            RiderCategory::Adult,
            TransportMode::Ferry,
            5.0,
            false,
            false,
            false,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FareError::UnsupportedFareTier {
                mode: TransportMode::Ferry,
                ..
            }
        ));
    }

    #[test]
    fn invalid_distances() {
        for distance in [-0.1, f64::NAN, f64::INFINITY] {
            let err = calculate_fare(
                RiderCategory::Adult,
                TransportMode::Train,
                distance,
                true,
                false,
                false,
            )
            .unwrap_err();
            assert!(matches!(err, FareError::InvalidDistance(_)));
        }
    }

    #[test]
    fn distance_is_checked_before_mode() {
        let err = calculate_fare(
            RiderCategory::Adult,
            TransportMode::Coach,
            -1.0,
            true,
            false,
            false,
        )
        .unwrap_err();
        assert_eq!(err, FareError::InvalidDistance(-1.0));
    }

    #[test]
    fn category_names() {
        assert_eq!("adult".parse(), Ok(RiderCategory::Adult));
        assert_eq!(" Child ".parse(), Ok(RiderCategory::Child));
        assert_eq!("SENIOR".parse(), Ok(RiderCategory::Senior));
        assert!("pensioner".parse::<RiderCategory>().is_err());

        for category in RiderCategory::ALL {
            assert_eq!(category.to_string().parse(), Ok(category));
        }
    }
}
