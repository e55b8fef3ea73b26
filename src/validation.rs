//! Input checks that belong to the collecting side, kept out of the
//! calculator so it stays a plain arithmetic transform.

use log::warn;
use serde::Serialize;
use thiserror::Error;

use crate::inputs::CarbonInputs;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("carEfficiency must be greater than zero")]
    ZeroEfficiency,
    #[error("{field} is a percentage and must not exceed 100, got {value}")]
    PercentageOutOfRange { field: &'static str, value: f64 },
}

/// Suggested input range for one field, as offered by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Questionnaire ranges. Advisory only: `validate` does not enforce the
/// maxima of non-percentage fields.
pub const FIELD_RANGES: [FieldRange; 12] = [
    FieldRange { field: "carMileage", min: 0.0, max: 50_000.0, step: 100.0 },
    FieldRange { field: "carEfficiency", min: 10.0, max: 60.0, step: 1.0 },
    FieldRange { field: "publicTransport", min: 0.0, max: 10_000.0, step: 100.0 },
    FieldRange { field: "flights", min: 0.0, max: 20.0, step: 1.0 },
    FieldRange { field: "electricityUsage", min: 0.0, max: 1000.0, step: 10.0 },
    FieldRange { field: "gasUsage", min: 0.0, max: 200.0, step: 5.0 },
    FieldRange { field: "renewablePercentage", min: 0.0, max: 100.0, step: 5.0 },
    FieldRange { field: "meatConsumption", min: 0.0, max: 21.0, step: 1.0 },
    FieldRange { field: "localFoodPercentage", min: 0.0, max: 100.0, step: 5.0 },
    FieldRange { field: "foodWaste", min: 0.0, max: 50.0, step: 1.0 },
    FieldRange { field: "shoppingFrequency", min: 0.0, max: 50.0, step: 1.0 },
    FieldRange { field: "recyclingPercentage", min: 0.0, max: 100.0, step: 5.0 },
];

/// Parse a free-text numeric entry the lenient way the questionnaire does:
/// anything but digits and the first `.` is dropped, and an empty or
/// unparsable remainder reads as zero. Never negative.
pub fn sanitize_numeric(raw: &str) -> f64 {
    let mut cleaned = String::with_capacity(raw.len());
    let mut seen_dot = false;
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            cleaned.push(ch);
        } else if ch == '.' && !seen_dot {
            seen_dot = true;
            cleaned.push(ch);
        }
    }

    if cleaned.is_empty() || cleaned == "." {
        return 0.0;
    }
    cleaned.parse::<f64>().unwrap_or(0.0)
}

fn fields(inputs: &CarbonInputs) -> [(&'static str, f64); 12] {
    let t = &inputs.transportation;
    let h = &inputs.home_energy;
    let f = &inputs.food;
    let l = &inputs.lifestyle;
    [
        ("carMileage", t.car_mileage),
        ("carEfficiency", t.car_efficiency),
        ("publicTransport", t.public_transport),
        ("flights", t.flights),
        ("electricityUsage", h.electricity_usage),
        ("gasUsage", h.gas_usage),
        ("renewablePercentage", h.renewable_percentage),
        ("meatConsumption", f.meat_consumption),
        ("localFoodPercentage", f.local_food_percentage),
        ("foodWaste", f.food_waste),
        ("shoppingFrequency", l.shopping_frequency),
        ("recyclingPercentage", l.recycling_percentage),
    ]
}

fn is_percentage(field: &str) -> bool {
    matches!(
        field,
        "renewablePercentage" | "localFoodPercentage" | "foodWaste" | "recyclingPercentage"
    )
}

/// Reject inputs the calculator would turn into non-finite or out-of-model
/// figures. Fields are checked in declaration order and the first failure
/// wins.
pub fn validate(inputs: &CarbonInputs) -> Result<(), InputError> {
    for (field, value) in fields(inputs) {
        if !value.is_finite() {
            return Err(InputError::NonFinite { field, value });
        }
        if value < 0.0 {
            return Err(InputError::Negative { field, value });
        }
        if field == "carEfficiency" && value == 0.0 {
            return Err(InputError::ZeroEfficiency);
        }
        if is_percentage(field) && value > 100.0 {
            return Err(InputError::PercentageOutOfRange { field, value });
        }
    }
    Ok(())
}

/// Reset every percentage above 100 to zero, returning the fields touched.
pub fn clamp_percentages(inputs: &mut CarbonInputs) -> Vec<&'static str> {
    let slots: [(&'static str, &mut f64); 4] = [
        ("renewablePercentage", &mut inputs.home_energy.renewable_percentage),
        ("localFoodPercentage", &mut inputs.food.local_food_percentage),
        ("foodWaste", &mut inputs.food.food_waste),
        ("recyclingPercentage", &mut inputs.lifestyle.recycling_percentage),
    ];

    let mut reset = Vec::new();
    for (field, value) in slots {
        if *value > 100.0 {
            warn!("{field} of {value} exceeds 100%, resetting to 0");
            *value = 0.0;
            reset.push(field);
        }
    }
    reset
}
