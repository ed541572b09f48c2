//! # fi-cli
//!
//! Command-line interface for the financial-inclusion forecast engine.

use clap::{Parser, Subcommand};
use forecast_facade::{
    latest_value, run_forecast, trend_growth, ForecastRequestBuilder, ForecastRow, Scenario,
    DEFAULT_TARGET_YEARS,
};
use records_facade::{load_csv_path, write_csv, RecordTable};
use std::fs::File;
use std::path::PathBuf;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "fi")]
#[command(about = "Financial-inclusion indicator forecasting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print latest value and last-step growth for an indicator
    Metrics {
        /// Unified record table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Indicator code
        #[arg(short = 'c', long)]
        indicator: String,

        /// Gender slice
        #[arg(short, long, default_value = "all")]
        gender: String,
    },

    /// Fit a trend forecast, optionally with event and scenario overlays
    Forecast {
        /// Unified record table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Indicator code
        #[arg(short = 'c', long)]
        indicator: String,

        /// Gender slice
        #[arg(short, long, default_value = "all")]
        gender: String,

        /// Target years (comma-separated, default 2025,2026,2027)
        #[arg(short, long, value_delimiter = ',')]
        years: Vec<i32>,

        /// Add modeled event effects to the central estimate
        #[arg(short, long)]
        events: bool,

        /// Scenario multiplier (pessimistic, base, optimistic)
        #[arg(short, long)]
        scenario: Option<Scenario>,

        /// Output file for the forecast table (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List indicator codes with observations
    Indicators {
        /// Unified record table (CSV)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Export the normalized record table as CSV
    Export {
        /// Unified record table (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn load_table(path: &PathBuf) -> CliResult<RecordTable> {
    let table = load_csv_path(path).map_err(|e| format!("Failed to load {:?}: {}", path, e))?;
    println!(
        "Loaded {} records from {:?}",
        table.len(),
        path.file_name().unwrap_or_default()
    );
    Ok(table)
}

fn run_metrics(input: PathBuf, indicator: String, gender: String) -> CliResult<()> {
    let table = load_table(&input)?;

    match latest_value(&table, &indicator, Some(&gender)) {
        Some(value) => println!("Latest value ({}, {}): {:.4}", indicator, gender, value),
        None => println!("Latest value ({}, {}): N/A", indicator, gender),
    }
    match trend_growth(&table, &indicator, &gender) {
        Some(delta) => println!("Last-step change: {:+.4}", delta),
        None => println!("Last-step change: N/A (needs at least 2 points)"),
    }

    Ok(())
}

fn run_forecast_cmd(
    input: PathBuf,
    indicator: String,
    gender: String,
    years: Vec<i32>,
    events: bool,
    scenario: Option<Scenario>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let table = load_table(&input)?;

    let mut builder = ForecastRequestBuilder::new()
        .indicator_code(&indicator)
        .gender(&gender)
        .include_events(events);
    if !years.is_empty() {
        builder = builder.target_years(years);
    } else {
        builder = builder.target_years(DEFAULT_TARGET_YEARS.to_vec());
    }
    if let Some(scenario) = scenario {
        builder = builder.scenario(scenario);
    }

    let rows = run_forecast(&table, &builder.build()).map_err(|e| e.to_string())?;

    println!("Forecast for {} ({}):", indicator, gender);
    for row in &rows {
        println!("  {}: {}", row.year, format_row(row));
    }

    if let Some(path) = output {
        write_forecast_json(&rows, &path)?;
        println!("Forecast table written to {:?}", path);
    }

    Ok(())
}

fn format_row(row: &ForecastRow) -> String {
    let fmt = |v: Option<f64>| match v {
        Some(v) => format!("{:.4}", v),
        None => "N/A".to_string(),
    };
    let mut parts = vec![
        format!("forecast={}", fmt(row.forecast)),
        format!("ci=[{}, {}]", fmt(row.ci_low), fmt(row.ci_high)),
    ];
    if row.forecast_with_events.is_some() {
        parts.push(format!("with_events={}", fmt(row.forecast_with_events)));
    }
    if row.forecast_with_scenario.is_some() {
        parts.push(format!("with_scenario={}", fmt(row.forecast_with_scenario)));
    }
    parts.join(" ")
}

fn write_forecast_json(rows: &[ForecastRow], path: &PathBuf) -> CliResult<()> {
    let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
    serde_json::to_writer_pretty(&mut file, rows)
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    Ok(())
}

fn run_indicators(input: PathBuf) -> CliResult<()> {
    let table = load_table(&input)?;
    let codes = table.indicator_codes();

    if codes.is_empty() {
        println!("No observed indicators found");
        return Ok(());
    }
    println!("Observed indicators ({}):", codes.len());
    for code in codes {
        println!("  {}", code);
    }
    if let Some((lo, hi)) = table.year_range() {
        println!("Observation years: {}-{}", lo, hi);
    }

    Ok(())
}

fn run_export(input: PathBuf, output: PathBuf) -> CliResult<()> {
    let table = load_table(&input)?;
    let file = File::create(&output).map_err(|e| format!("Failed to create output: {}", e))?;
    write_csv(&table, file).map_err(|e| e.to_string())?;
    println!("Exported {} records to {:?}", table.len(), output);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Metrics {
            input,
            indicator,
            gender,
        } => run_metrics(input, indicator, gender),

        Commands::Forecast {
            input,
            indicator,
            gender,
            years,
            events,
            scenario,
            output,
        } => run_forecast_cmd(input, indicator, gender, years, events, scenario, output),

        Commands::Indicators { input } => run_indicators(input),

        Commands::Export { input, output } => run_export(input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
