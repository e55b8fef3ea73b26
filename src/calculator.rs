use serde::{Deserialize, Serialize};

use crate::factors::{EmissionFactors, KG_PER_TON, MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use crate::inputs::{CarbonInputs, FoodInputs, HomeEnergyInputs, LifestyleInputs, TransportationInputs};

/// Footprint category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Transportation,
    HomeEnergy,
    Food,
    Lifestyle,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::HomeEnergy,
        Category::Food,
        Category::Lifestyle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::HomeEnergy => "Home Energy",
            Category::Food => "Food",
            Category::Lifestyle => "Lifestyle",
        }
    }
}

/// Annual footprint in metric tons CO2e.
///
/// `total` is always the sum of the four categories. Values are not clamped,
/// so out-of-range percentages can drive a category below zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub transportation: f64,
    pub home_energy: f64,
    pub food: f64,
    pub lifestyle: f64,
    pub total: f64,
}

impl FootprintResult {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::HomeEnergy => self.home_energy,
            Category::Food => self.food,
            Category::Lifestyle => self.lifestyle,
        }
    }

    /// Category values in display order.
    pub fn categories(&self) -> [(Category, f64); 4] {
        Category::ALL.map(|c| (c, self.get(c)))
    }
}

const FACTORS: EmissionFactors = EmissionFactors::STANDARD;

/// Car fuel, transit and flights. A zero `car_efficiency` yields a non-finite
/// value.
pub fn transportation_tons(t: &TransportationInputs) -> f64 {
    let car = (t.car_mileage / t.car_efficiency) * FACTORS.car_emissions_per_gallon;
    let transit = t.public_transport * FACTORS.public_transport_emissions_per_mile;
    let flights = t.flights * FACTORS.flight_emissions_per_trip;
    (car + transit + flights) / KG_PER_TON
}

/// Electricity net of the renewable share, plus natural gas. Monthly usage.
pub fn home_energy_tons(h: &HomeEnergyInputs) -> f64 {
    let electricity = h.electricity_usage
        * MONTHS_PER_YEAR
        * FACTORS.electricity_emissions_per_kwh
        * (1.0 - h.renewable_percentage / 100.0);
    let gas = h.gas_usage * MONTHS_PER_YEAR * FACTORS.gas_emissions_per_therm;
    (electricity + gas) / KG_PER_TON
}

/// Weekly meat servings, reduced by the local share, raised by waste.
pub fn food_tons(f: &FoodInputs) -> f64 {
    let meat = f.meat_consumption * WEEKS_PER_YEAR * FACTORS.meat_emissions_per_serving;
    let local_reduction =
        meat * (f.local_food_percentage / 100.0) * FACTORS.local_food_reduction_factor;
    // Waste is applied as raw percentage points; the factor already holds the /100.
    let waste_increase = meat * f.food_waste * FACTORS.food_waste_factor;
    (meat - local_reduction + waste_increase) / KG_PER_TON
}

/// Monthly purchases less the recycling credit.
pub fn lifestyle_tons(l: &LifestyleInputs) -> f64 {
    let shopping = l.shopping_frequency * MONTHS_PER_YEAR * FACTORS.shopping_emissions_per_item;
    // Same raw-percentage convention as food waste.
    let recycling_reduction = shopping * l.recycling_percentage * FACTORS.recycling_reduction_factor;
    (shopping - recycling_reduction) / KG_PER_TON
}

/// Compute the annual footprint. Pure and infallible; inputs are not
/// validated.
pub fn calculate(inputs: &CarbonInputs) -> FootprintResult {
    let transportation = transportation_tons(&inputs.transportation);
    let home_energy = home_energy_tons(&inputs.home_energy);
    let food = food_tons(&inputs.food);
    let lifestyle = lifestyle_tons(&inputs.lifestyle);

    FootprintResult {
        transportation,
        home_energy,
        food,
        lifestyle,
        total: transportation + home_energy + food + lifestyle,
    }
}
