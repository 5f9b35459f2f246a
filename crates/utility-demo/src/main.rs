//! Utility AI Demo
//!
//! One agent idles, wanders when bored, and changes colour when the scripted
//! player comes too close. Selection is made each tick by the utility
//! controller.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use utility_core::TracingObserver;
use utility_demo::{default_config_toml, DemoConfig, EventLogger, Simulation};

/// Command line arguments for the demo
#[derive(Parser, Debug)]
#[command(name = "utility_demo")]
#[command(about = "Utility AI action selection demo")]
struct Args {
    /// Random seed for tie-breaking (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate (overrides the config file)
    #[arg(long)]
    ticks: Option<u64>,

    /// Seconds between ticks (overrides the config file)
    #[arg(long)]
    dt: Option<f32>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every controller event as JSONL to this file
    #[arg(long)]
    events_out: Option<PathBuf>,

    /// Print the debug overlay after every tick
    #[arg(long)]
    debug: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.controller.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.demo.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        config.demo.dt = dt;
    }

    println!("Utility AI Demo");
    println!("===============");
    match config.controller.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: entropy"),
    }
    println!("Ticks: {}", config.demo.ticks);
    println!("Time step: {}s", config.demo.dt);
    println!();

    let mut sim = Simulation::new(&config).context("failed to set up simulation")?;
    sim.subscribe(TracingObserver);

    let logger = match &args.events_out {
        Some(path) => {
            let logger = EventLogger::new(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            sim.subscribe(logger.clone());
            Some(logger)
        }
        None => None,
    };

    for _ in 0..config.demo.ticks {
        sim.step();

        if args.debug {
            println!("t = {:.2}s", sim.time());
            println!("{}", sim.render_overlay());
        }
    }
    sim.stop();

    if let Some(logger) = &logger {
        logger.flush().context("failed to flush event log")?;
        tracing::info!("Wrote {} events", logger.event_count());
    }

    println!("{}", serde_json::to_string_pretty(sim.summary())?);

    Ok(())
}
