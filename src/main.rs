//! Command line front end: generate or load cities, run every heuristic, and
//! report tour lengths against the MST lower bound.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::info;

use tsp_construct::config::InstanceConfig;
use tsp_construct::constructive::Heuristic;
use tsp_construct::distance::DistanceMatrix;
use tsp_construct::error::TspResult;
use tsp_construct::evaluation::compare;
use tsp_construct::models::Point;

#[derive(Parser, Debug)]
#[command(
    name = "tsp-construct",
    version,
    about = "Compare constructive TSP heuristics against the MST lower bound"
)]
struct Cli {
    /// Number of random cities to generate.
    #[arg(short = 'n', long)]
    cities: Option<usize>,

    /// Width of the generation area.
    #[arg(long)]
    width: Option<f64>,

    /// Height of the generation area.
    #[arg(long)]
    height: Option<f64>,

    /// Seed for reproducible instances.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON instance configuration; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON array of points to use instead of generating them.
    #[arg(short, long, conflicts_with_all = ["cities", "width", "height", "seed", "config"])]
    points: Option<PathBuf>,

    /// Print the comparison as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn set_up_logging(verbosity: u8) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> TspResult<InstanceConfig> {
    let mut config = match &cli.config {
        Some(path) => InstanceConfig::load(path)?,
        None => InstanceConfig::default(),
    };
    if let Some(n) = cli.cities {
        config.num_cities = n;
    }
    if let Some(w) = cli.width {
        config.width = w;
    }
    if let Some(h) = cli.height {
        config.height = h;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn load_points(path: &Path) -> TspResult<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn load_instance(cli: &Cli) -> TspResult<Vec<Point>> {
    match &cli.points {
        Some(path) => {
            info!("loading cities from {}", path.display());
            load_points(path)
        }
        None => {
            let config = resolve_config(cli)?;
            info!(
                "generating {} cities in {}x{} (seed {:?})",
                config.num_cities, config.width, config.height, config.seed
            );
            config.generate()
        }
    }
}

/// Runs the comparison and renders it as a table or JSON.
fn run(cli: &Cli) -> TspResult<String> {
    let points = load_instance(cli)?;
    let distances = DistanceMatrix::from_points(&points);
    distances.validate(1e-9)?;

    let comparison = compare(&distances, &Heuristic::ALL)?;
    if cli.json {
        Ok(serde_json::to_string_pretty(&comparison)?)
    } else {
        Ok(comparison.to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = set_up_logging(cli.verbose) {
        eprintln!("failed to set up logging: {e}");
    }

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tsp_construct::error::TspError;

    fn json_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("writable");
        file
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tsp-construct").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = json_file(r#"{ "num_cities": 30, "width": 50.0, "seed": 1 }"#);
        let path = file.path().to_str().expect("utf-8 path");
        let cli = parse(&["--config", path, "--cities", "7", "--seed", "9"]);

        let config = resolve_config(&cli).expect("valid config");
        assert_eq!(config.num_cities, 7);
        assert_eq!(config.seed, Some(9));
        // not overridden
        assert_eq!(config.width, 50.0);
        assert_eq!(config.height, 100.0);
    }

    #[test]
    fn test_config_file_without_flags() {
        let file = json_file(r#"{ "num_cities": 4, "seed": 3 }"#);
        let path = file.path().to_str().expect("utf-8 path");
        let cli = parse(&["--config", path]);
        let points = load_instance(&cli).expect("valid instance");
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_load_points_file() {
        let file = json_file(
            r#"[{"x":0.0,"y":0.0},{"x":1.0,"y":0.0},{"x":1.0,"y":1.0},{"x":0.0,"y":1.0}]"#,
        );
        let path = file.path().to_str().expect("utf-8 path");
        let cli = parse(&["--points", path, "--json"]);

        let points = load_instance(&cli).expect("valid points");
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], Point::new(1.0, 1.0));

        let output = run(&cli).expect("valid run");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
        assert_eq!(value["num_cities"], 4);
        assert!((value["lower_bound"].as_f64().expect("number") - 3.0).abs() < 1e-10);
        assert_eq!(value["runs"].as_array().expect("array").len(), 2);
    }

    #[test]
    fn test_malformed_points_file() {
        let file = json_file(r#"[{"x":0.0}]"#);
        let path = file.path().to_str().expect("utf-8 path");
        let cli = parse(&["--points", path]);
        assert!(matches!(run(&cli), Err(TspError::Json(_))));
    }

    #[test]
    fn test_zero_cities_is_invalid_input() {
        let cli = parse(&["--cities", "0"]);
        let err = run(&cli).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_table_output() {
        let cli = parse(&["--cities", "6", "--seed", "42"]);
        let output = run(&cli).expect("valid run");
        assert!(output.contains("cities: 6"));
        assert!(output.contains("nearest neighbor"));
        assert!(output.contains("cheapest insertion"));
    }

    #[test]
    fn test_points_conflicts_with_generation_flags() {
        for extra in [["--config", "c.json"], ["--cities", "5"], ["--seed", "1"]] {
            let args = ["tsp-construct", "--points", "p.json", extra[0], extra[1]];
            assert!(Cli::try_parse_from(args).is_err(), "{extra:?}");
        }
    }
}
