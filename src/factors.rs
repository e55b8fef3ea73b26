//! Fixed emission factors and unit conversions.
//!
//! These are averaged figures, not a calibrated model. They are read-only and
//! shared by every calculation.

use serde::Serialize;

// Transportation
/// kg CO2 per gallon of gasoline burned.
pub const CAR_EMISSIONS_PER_GALLON: f64 = 8.89;
/// kg CO2 per passenger-mile of public transit.
pub const PUBLIC_TRANSPORT_EMISSIONS_PER_MILE: f64 = 0.14;
/// kg CO2 per average round-trip flight.
pub const FLIGHT_EMISSIONS_PER_TRIP: f64 = 1100.0;

// Home energy
pub const ELECTRICITY_EMISSIONS_PER_KWH: f64 = 0.4;
pub const GAS_EMISSIONS_PER_THERM: f64 = 5.3;

// Food
pub const MEAT_EMISSIONS_PER_SERVING: f64 = 3.0;
/// Fraction of meat emissions removed when the whole diet is local.
pub const LOCAL_FOOD_REDUCTION_FACTOR: f64 = 0.20;
/// Applied per raw waste percentage point (already carries the /100).
pub const FOOD_WASTE_FACTOR: f64 = 0.01;

// Lifestyle
pub const SHOPPING_EMISSIONS_PER_ITEM: f64 = 25.0;
/// Applied per raw recycling percentage point (already carries the /100).
pub const RECYCLING_REDUCTION_FACTOR: f64 = 0.003;

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const KG_PER_TON: f64 = 1000.0;

/// The factor table as one value, for callers that want to display or export
/// the figures behind a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactors {
    pub car_emissions_per_gallon: f64,
    pub public_transport_emissions_per_mile: f64,
    pub flight_emissions_per_trip: f64,
    pub electricity_emissions_per_kwh: f64,
    pub gas_emissions_per_therm: f64,
    pub meat_emissions_per_serving: f64,
    pub local_food_reduction_factor: f64,
    pub food_waste_factor: f64,
    pub shopping_emissions_per_item: f64,
    pub recycling_reduction_factor: f64,
}

impl EmissionFactors {
    pub const STANDARD: EmissionFactors = EmissionFactors {
        car_emissions_per_gallon: CAR_EMISSIONS_PER_GALLON,
        public_transport_emissions_per_mile: PUBLIC_TRANSPORT_EMISSIONS_PER_MILE,
        flight_emissions_per_trip: FLIGHT_EMISSIONS_PER_TRIP,
        electricity_emissions_per_kwh: ELECTRICITY_EMISSIONS_PER_KWH,
        gas_emissions_per_therm: GAS_EMISSIONS_PER_THERM,
        meat_emissions_per_serving: MEAT_EMISSIONS_PER_SERVING,
        local_food_reduction_factor: LOCAL_FOOD_REDUCTION_FACTOR,
        food_waste_factor: FOOD_WASTE_FACTOR,
        shopping_emissions_per_item: SHOPPING_EMISSIONS_PER_ITEM,
        recycling_reduction_factor: RECYCLING_REDUCTION_FACTOR,
    };
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_matches_constants() {
        let f = EmissionFactors::default();
        assert_eq!(f.car_emissions_per_gallon, 8.89);
        assert_eq!(f.flight_emissions_per_trip, 1100.0);
        assert_eq!(f.food_waste_factor, 0.01);
        assert_eq!(f.recycling_reduction_factor, 0.003);
        assert_eq!(f, EmissionFactors::STANDARD);
    }

    #[test]
    fn test_factor_table_serializes_camel_case() {
        let json = serde_json::to_value(EmissionFactors::STANDARD).unwrap();
        assert_eq!(json["gasEmissionsPerTherm"], 5.3);
        assert_eq!(json["shoppingEmissionsPerItem"], 25.0);
    }
}
