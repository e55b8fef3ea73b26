use serde::{Deserialize, Serialize};

/// Yearly travel figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationInputs {
    /// Miles driven per year.
    pub car_mileage: f64,
    /// Miles per gallon. Must be > 0.
    pub car_efficiency: f64,
    /// Transit miles per year.
    pub public_transport: f64,
    /// Round-trip flights per year.
    pub flights: f64,
}

/// Monthly household energy use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeEnergyInputs {
    /// kWh per month.
    pub electricity_usage: f64,
    /// Therms per month.
    pub gas_usage: f64,
    /// 0–100.
    pub renewable_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodInputs {
    /// Meat servings per week.
    pub meat_consumption: f64,
    /// 0–100.
    pub local_food_percentage: f64,
    /// 0–100, raw percentage points.
    pub food_waste: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleInputs {
    /// New items bought per month.
    pub shopping_frequency: f64,
    /// 0–100, raw percentage points.
    pub recycling_percentage: f64,
}

/// Self-reported lifestyle figures for one calculation.
///
/// The calculator does not check these; run them through
/// [`crate::validation::validate`] first when they come from a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonInputs {
    pub transportation: TransportationInputs,
    pub home_energy: HomeEnergyInputs,
    pub food: FoodInputs,
    pub lifestyle: LifestyleInputs,
}

impl CarbonInputs {
    /// No activity at all. Efficiency stays at a typical 25 mpg so the
    /// transportation figure remains finite.
    pub fn zero() -> Self {
        CarbonInputs {
            transportation: TransportationInputs {
                car_mileage: 0.0,
                car_efficiency: 25.0,
                public_transport: 0.0,
                flights: 0.0,
            },
            home_energy: HomeEnergyInputs {
                electricity_usage: 0.0,
                gas_usage: 0.0,
                renewable_percentage: 0.0,
            },
            food: FoodInputs {
                meat_consumption: 0.0,
                local_food_percentage: 0.0,
                food_waste: 0.0,
            },
            lifestyle: LifestyleInputs {
                shopping_frequency: 0.0,
                recycling_percentage: 0.0,
            },
        }
    }
}

/// Sample profile the questionnaire starts from.
impl Default for CarbonInputs {
    fn default() -> Self {
        CarbonInputs {
            transportation: TransportationInputs {
                car_mileage: 5000.0,
                car_efficiency: 25.0,
                public_transport: 1000.0,
                flights: 2.0,
            },
            home_energy: HomeEnergyInputs {
                electricity_usage: 300.0,
                gas_usage: 50.0,
                renewable_percentage: 20.0,
            },
            food: FoodInputs {
                meat_consumption: 3.0,
                local_food_percentage: 30.0,
                food_waste: 15.0,
            },
            lifestyle: LifestyleInputs {
                shopping_frequency: 2.0,
                recycling_percentage: 50.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_camel_case_json() {
        let raw = r#"{
            "transportation": {"carMileage": 1200, "carEfficiency": 30, "publicTransport": 0, "flights": 1},
            "homeEnergy": {"electricityUsage": 250, "gasUsage": 10, "renewablePercentage": 0},
            "food": {"meatConsumption": 7, "localFoodPercentage": 10, "foodWaste": 5},
            "lifestyle": {"shoppingFrequency": 4, "recyclingPercentage": 25}
        }"#;
        let inputs: CarbonInputs = serde_json::from_str(raw).unwrap();
        assert_eq!(inputs.transportation.car_mileage, 1200.0);
        assert_eq!(inputs.home_energy.electricity_usage, 250.0);
        assert_eq!(inputs.food.food_waste, 5.0);
        assert_eq!(inputs.lifestyle.recycling_percentage, 25.0);
    }

    #[test]
    fn test_missing_group_is_rejected() {
        let raw = r#"{"transportation": {"carMileage": 1, "carEfficiency": 1, "publicTransport": 0, "flights": 0}}"#;
        assert!(serde_json::from_str::<CarbonInputs>(raw).is_err());
    }

    #[test]
    fn test_zero_profile_keeps_efficiency_positive() {
        let z = CarbonInputs::zero();
        assert!(z.transportation.car_efficiency > 0.0);
        assert_eq!(z.food.meat_consumption, 0.0);
    }
}
