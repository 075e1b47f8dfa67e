use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ecotone_core::{init_logging, EcosystemConfig, EcosystemState, Metrics};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// RNG seed override for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the final population report as JSON to this path
    #[arg(short, long)]
    report: Option<String>,
}

fn load_config(path: &str) -> Result<EcosystemConfig> {
    if Path::new(path).exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path}"))?;
        EcosystemConfig::from_toml(&content).with_context(|| format!("parsing {path}"))
    } else {
        tracing::info!(path = path, "Config file not found, using defaults");
        Ok(EcosystemConfig::default())
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut state = EcosystemState::new(config)?;
    let metrics = Metrics::new();
    let mut announced_extinct = HashSet::new();

    println!("Running ecosystem for {} ticks...", args.ticks);
    for _ in 0..args.ticks {
        let started = Instant::now();
        state.tick()?;
        metrics.record_tick(started.elapsed(), state.registry().total_count());

        for name in state.check_extinction() {
            if announced_extinct.insert(name.clone()) {
                metrics.log_event(
                    "extinction",
                    &format!("{name} at tick {}", state.time_step()),
                );
            }
        }
        if state.registry().total_count() == 0 {
            tracing::info!(tick = state.time_step(), "All species extinct, stopping");
            break;
        }
    }

    let report = state.population_report();
    let json = serde_json::to_string_pretty(&report)?;
    match &args.report {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("writing report to {path}"))?;
            println!("Report written to {path}");
        }
        None => println!("{json}"),
    }
    println!(
        "Finished at tick {} in {:.2}s.",
        state.time_step(),
        metrics.elapsed().as_secs_f64()
    );

    Ok(())
}
