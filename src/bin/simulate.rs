//! Headless Flappy simulator CLI.
//!
//! Plays rounds with a scripted autopilot to see how a parameter bundle
//! plays out.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 100 runs, default params
//!   cargo run --bin simulate -- -n 20 --seed 42       # Reproducible run
//!   cargo run --bin simulate -- --params tuned.json   # Try a parameter file

use anyhow::Context;
use flappy::core::SessionParams;
use flappy::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::Path;
use std::str::FromStr;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args)?;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLAPPY SIMULATOR                                 ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Frames:     {}", config.max_frames);
    println!("  Margin:         {:.1}", config.reaction_margin);
    println!("  Gravity:        {}", config.params.gravity);
    println!("  Base Rate:      {}", config.params.pipe_base_rate);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)
            .with_context(|| format!("failed to write {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<SimConfig> {
    let mut config = SimConfig::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(iter.next()).unwrap_or(config.num_runs);
            }
            "-s" | "--seed" => config.seed = parse_value(iter.next()),
            "-f" | "--frames" => {
                config.max_frames = parse_value(iter.next()).unwrap_or(config.max_frames);
            }
            "-m" | "--margin" => {
                config.reaction_margin =
                    parse_value(iter.next()).unwrap_or(config.reaction_margin);
            }
            "--params" => {
                if let Some(file) = iter.next() {
                    let path = Path::new(file);
                    config.params = SessionParams::load(path)
                        .with_context(|| format!("invalid parameter file {}", path.display()))?;
                }
            }
            "-v" | "--verbose" => config.verbosity = 2,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
    }

    Ok(config)
}

fn parse_value<T: FromStr>(value: Option<&String>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}

fn print_help() {
    println!("Flappy Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of rounds (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -f, --frames <F>    Max frames per round (default: 18000)");
    println!("    -m, --margin <M>    Autopilot reaction margin (default: 10.0)");
    println!("    --params <FILE>     Session parameters as JSON");
    println!("    -v, --verbose       Print every round");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 20 -s 7      # Reproducible");
    println!("    cargo run --bin simulate -- -m 25 --json    # Later jumps, save JSON");
}
