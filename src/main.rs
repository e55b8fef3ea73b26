use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use serde::Serialize;

use carbon_footprint::validation::FIELD_RANGES;
use carbon_footprint::{
    calculate, clamp_percentages, recommendations, render_report, validate, CarbonInputs,
    EmissionFactors, FootprintResult, ImpactClassifier, ImpactLevel, Recommendation,
    ThresholdImpact,
};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Estimate an annual carbon footprint from lifestyle figures.
#[derive(Debug, Parser)]
#[command(name = "carbon-footprint", version)]
struct Cli {
    /// JSON inputs file; `-` or omitted reads stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use the built-in sample profile instead of reading inputs.
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Output as a text report or JSON.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reset percentages above 100 to 0 instead of rejecting them.
    #[arg(long)]
    lenient: bool,

    /// Print the emission factor table as JSON and exit.
    #[arg(long)]
    factors: bool,

    /// Print the suggested input ranges as JSON and exit.
    #[arg(long, conflicts_with = "factors")]
    ranges: bool,
}

#[derive(Debug, PartialEq)]
enum Source<'a> {
    Sample,
    Stdin,
    File(&'a Path),
}

impl Cli {
    fn needs_inputs(&self) -> bool {
        !(self.factors || self.ranges)
    }

    fn source(&self) -> Source<'_> {
        if self.sample {
            return Source::Sample;
        }
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Source::File(path),
            _ => Source::Stdin,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput {
    result: FootprintResult,
    impact_level: ImpactLevel,
    recommendations: Vec<Recommendation>,
}

fn read_raw(source: &Source<'_>) -> Result<Option<String>, Box<dyn Error>> {
    match source {
        Source::Sample => Ok(None),
        Source::File(path) => {
            debug!("reading inputs from {}", path.display());
            Ok(Some(fs::read_to_string(path)?))
        }
        Source::Stdin => {
            debug!("reading inputs from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(Some(buf))
        }
    }
}

/// Produce the program output. `raw` is the JSON inputs, `None` for the
/// sample profile.
fn run(cli: &Cli, raw: Option<&str>, today: NaiveDate) -> Result<String, Box<dyn Error>> {
    if cli.factors {
        return Ok(serde_json::to_string_pretty(&EmissionFactors::STANDARD)?);
    }
    if cli.ranges {
        return Ok(serde_json::to_string_pretty(&FIELD_RANGES)?);
    }

    let mut inputs = match raw {
        Some(raw) => serde_json::from_str::<CarbonInputs>(raw)?,
        None => CarbonInputs::default(),
    };
    if cli.lenient {
        let reset = clamp_percentages(&mut inputs);
        if !reset.is_empty() {
            info!("reset {} out-of-range percentage(s)", reset.len());
        }
    }
    validate(&inputs)?;

    let result = calculate(&inputs);
    debug!(
        "transportation={:.3} home_energy={:.3} food={:.3} lifestyle={:.3} total={:.3}",
        result.transportation, result.home_energy, result.food, result.lifestyle, result.total
    );

    match cli.format {
        Format::Text => Ok(render_report(&result, today)?),
        Format::Json => {
            let output = JsonOutput {
                result,
                impact_level: ThresholdImpact::default().classify(result.total),
                recommendations: recommendations(&result),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = if cli.needs_inputs() {
        read_raw(&cli.source())?
    } else {
        None
    };
    let today = chrono::Local::now().date_naive();
    let output = run(&cli, raw.as_deref(), today)?;
    println!("{}", output.trim_end());
    Ok(())
}
