use serde::{Deserialize, Serialize};

use crate::calculator::{Category, FootprintResult};

/// Reference figure shown next to a result, tons CO2e per year.
pub const AVERAGE_AMERICAN_TONS: f64 = 16.0;

/// Impact band for an annual total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    pub fn label(self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::High => "High",
        }
    }
}

/// Trait for mapping an annual total onto an impact band.
pub trait ImpactClassifier {
    fn classify(&self, total_tons: f64) -> ImpactLevel;
}

/// Two-threshold classifier. Anything not below `moderate_below`, NaN
/// included, is High.
#[derive(Debug, Clone)]
pub struct ThresholdImpact {
    pub low_below: f64,
    pub moderate_below: f64,
}

impl Default for ThresholdImpact {
    fn default() -> Self {
        ThresholdImpact {
            low_below: 5.0,
            moderate_below: 10.0,
        }
    }
}

impl ImpactClassifier for ThresholdImpact {
    fn classify(&self, total_tons: f64) -> ImpactLevel {
        if total_tons < self.low_below {
            ImpactLevel::Low
        } else if total_tons < self.moderate_below {
            ImpactLevel::Moderate
        } else {
            ImpactLevel::High
        }
    }
}

/// A reduction tip triggered by one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub text: &'static str,
}

/// Per-category trigger, tons CO2e. A category strictly above its threshold
/// gets its tip.
pub fn recommendation_threshold(category: Category) -> f64 {
    match category {
        Category::Transportation => 3.0,
        Category::HomeEnergy => 2.0,
        Category::Food => 2.0,
        Category::Lifestyle => 1.0,
    }
}

fn recommendation_text(category: Category) -> &'static str {
    match category {
        Category::Transportation => {
            "Consider carpooling, using public transportation, or switching to an electric vehicle."
        }
        Category::HomeEnergy => {
            "Reduce energy consumption by using energy-efficient appliances and increasing renewable energy usage."
        }
        Category::Food => {
            "Reduce meat consumption and food waste, and buy more locally sourced food."
        }
        Category::Lifestyle => {
            "Increase recycling efforts and reduce new purchases by reusing or repairing items."
        }
    }
}

/// Tips for every category over its threshold, in category order.
pub fn recommendations(result: &FootprintResult) -> Vec<Recommendation> {
    result
        .categories()
        .into_iter()
        .filter(|(category, tons)| *tons > recommendation_threshold(*category))
        .map(|(category, _)| Recommendation {
            category,
            text: recommendation_text(category),
        })
        .collect()
}
