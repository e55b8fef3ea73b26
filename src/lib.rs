#![forbid(unsafe_code)]

//! Annual carbon footprint estimate from self-reported lifestyle figures.
//!
//! [`calculate`] maps a [`CarbonInputs`] onto a [`FootprintResult`] using a
//! fixed table of average emission factors. The other modules hold the
//! checks and presentation rules that sit on either side of it.

pub mod calculator;
pub mod factors;
pub mod impact;
pub mod inputs;
pub mod report;
pub mod validation;

pub use calculator::{
    calculate, food_tons, home_energy_tons, lifestyle_tons, transportation_tons, Category,
    FootprintResult,
};
pub use factors::EmissionFactors;
pub use impact::{recommendations, ImpactClassifier, ImpactLevel, Recommendation, ThresholdImpact};
pub use inputs::{CarbonInputs, FoodInputs, HomeEnergyInputs, LifestyleInputs, TransportationInputs};
pub use report::{category_shares, render_report, write_report, CategoryShare};
pub use validation::{clamp_percentages, sanitize_numeric, validate, InputError};
