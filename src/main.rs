use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use cellsim::{Automaton, CustomCell, SimConfig};

// Larger grids still run, they just stop being pleasant to watch in a terminal.
const INTERACTIVE_MAX_SIDE: u32 = 300;

/// Run a cellular automaton and print every generation as text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 100)]
    generations: u64,

    /// Initial pattern: block, glider, random, single or custom
    #[arg(short, long, default_value = "random")]
    pattern: String,

    /// Automaton: conway, highlife, daynight, majority, brian, wireworld, ant, or a B.../S... rule
    #[arg(short, long, default_value = "conway")]
    rule: String,

    /// Cell for the custom pattern; repeat for more cells
    #[arg(long = "cell", value_name = "X,Y[=STATE]")]
    cells: Vec<CustomCell>,

    /// Seed for the random pattern
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between generations
    #[arg(long, value_name = "MILLISECONDS", default_value_t = 0)]
    delay_ms: u64,

    /// Read the whole configuration from a JSON file instead of the flags above
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["width", "height", "generations", "pattern", "rule", "cells", "seed", "delay_ms"]
    )]
    config: Option<PathBuf>,

    /// Only print the final generation
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<SimConfig> {
        if let Some(path) = &self.config {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return SimConfig::from_json(&json)
                .with_context(|| format!("failed to parse {}", path.display()));
        }

        Ok(SimConfig {
            name: String::new(),
            width: self.width,
            height: self.height,
            generations: self.generations,
            pattern: self.pattern,
            rule: self.rule,
            cells: self.cells,
            seed: self.seed,
            delay_ms: self.delay_ms,
        })
    }
}

fn print_generation(automaton: &Automaton) {
    println!(
        "Generation {} ({} live)",
        automaton.generation(),
        automaton.live_count()
    );
    println!("{}\n", automaton.render());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let quiet = args.quiet;
    let config = args.into_config()?;

    if config.width > INTERACTIVE_MAX_SIDE || config.height > INTERACTIVE_MAX_SIDE {
        log::warn!(
            "{}x{} is larger than {side}x{side}; output will be hard to follow",
            config.width,
            config.height,
            side = INTERACTIVE_MAX_SIDE
        );
    }

    let mut automaton = Automaton::initialize(&config)
        .with_context(|| format!("invalid configuration for rule {:?}", config.rule))?;

    if !quiet {
        print_generation(&automaton);
    }
    let delay = Duration::from_millis(config.delay_ms);
    for _ in 0..config.generations {
        automaton.step();
        if !quiet {
            print_generation(&automaton);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }
    if quiet {
        print_generation(&automaton);
    }

    log::info!(
        "Finished {} after {} generations with {} live cells",
        automaton.name(),
        automaton.generation(),
        automaton.live_count()
    );
    Ok(())
}
