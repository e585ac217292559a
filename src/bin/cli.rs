//! routeclean CLI - Clean a GPS journey recorded as CSV fixes
//!
//! Usage:
//!   routeclean-cli <input.csv> [--output <file>] [--ratio <r>] [--noise]
//!
//! Reads `latitude,longitude,timestamp` records, drops fixes whose implied
//! speed to both neighbors exceeds the journey's average speed times the
//! ratio, and writes the surviving fixes in the same format. With `--noise`
//! the discarded fixes are written instead, which is handy for eyeballing
//! what the filter is removing.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;
use routeclean::{classify, geo_utils::route_distance, DEFAULT_NOISE_RATIO};

#[derive(Parser)]
#[command(name = "routeclean-cli")]
#[command(about = "Remove noisy fixes from a GPS journey", long_about = None)]
struct Cli {
    /// Input CSV file (latitude,longitude,timestamp per line, no header)
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Multiples of the average speed before a transition is suspicious
    #[arg(short, long, default_value_t = DEFAULT_NOISE_RATIO)]
    ratio: f64,

    /// Write the discarded points instead of the cleaned route
    #[arg(long)]
    noise: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> routeclean::Result<()> {
    let points = routeclean::read_points_from_path(&cli.input)?;
    info!(
        "loaded {} fixes ({:.1} km raw route)",
        points.len(),
        route_distance(&points) / 1000.0
    );

    let result = classify(&points, cli.ratio);
    info!(
        "kept {} fixes, discarded {} as noise ({:.1} km cleaned route)",
        result.kept.len(),
        result.noise.len(),
        route_distance(&result.kept) / 1000.0
    );

    let selected = if cli.noise { &result.noise } else { &result.kept };
    match &cli.output {
        Some(path) => routeclean::write_points_to_path(path, selected)?,
        None => routeclean::write_points(std::io::stdout().lock(), selected)?,
    }

    Ok(())
}
