use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::calculator::{Category, FootprintResult};
use crate::impact::{recommendations, ImpactClassifier, ThresholdImpact, AVERAGE_AMERICAN_TONS};

/// One category's slice of the total, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: Category,
    pub tons: f64,
    pub percent: f64,
}

/// Category shares of the total. All zero when the total is zero or not
/// finite.
pub fn category_shares(result: &FootprintResult) -> Vec<CategoryShare> {
    let usable = result.total.is_finite() && result.total != 0.0;
    result
        .categories()
        .into_iter()
        .map(|(category, tons)| CategoryShare {
            category,
            tons,
            percent: if usable { tons / result.total * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Write the plain-text version of the downloadable report.
pub fn write_report<W: fmt::Write>(
    out: &mut W,
    result: &FootprintResult,
    date: NaiveDate,
) -> fmt::Result {
    let level = ThresholdImpact::default().classify(result.total);

    writeln!(out, "Your Carbon Footprint Report")?;
    writeln!(out, "{}", date.format("%Y-%m-%d"))?;
    writeln!(out)?;
    writeln!(out, "Total: {:.2} tons CO₂e/year", result.total)?;
    writeln!(out)?;
    writeln!(out, "Carbon Breakdown:")?;
    for share in category_shares(result) {
        writeln!(
            out,
            "  {}: {:.2} tons CO₂e ({:.1}%)",
            share.category.label(),
            share.tons,
            share.percent
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Your impact level is {}", level.label())?;
    writeln!(
        out,
        "The average American produces about {AVERAGE_AMERICAN_TONS:.0} tons CO₂e per year"
    )?;
    writeln!(out)?;
    writeln!(out, "Recommendations:")?;
    let recs = recommendations(result);
    if recs.is_empty() {
        writeln!(out, "  Every category is below its reduction threshold.")?;
    }
    for rec in recs {
        writeln!(out, "  - {}", rec.text)?;
    }
    Ok(())
}

pub fn render_report(result: &FootprintResult, date: NaiveDate) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, result, date)?;
    Ok(out)
}
