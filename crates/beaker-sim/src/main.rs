//! Command-line runner: build a world, advance it, report.
//!
//! ```text
//! beaker-sim [--seed N] [--ticks N] [--interval N] [--csv PATH]
//! ```
//!
//! Prints an interval summary to stdout and writes a per-tick time series
//! (population, resources, cumulative event counters, per-heat-class
//! counts) as CSV.

use beaker_core::WorldConfig;
use beaker_world::World;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::process::ExitCode;

struct Args {
    seed: u64,
    ticks: u64,
    interval: u64,
    csv: Option<String>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Args {
            seed: WorldConfig::default().seed,
            ticks: 1000,
            interval: 100,
            csv: Some("timeseries.csv".to_owned()),
        };
        let mut iter = std::env::args().skip(1);
        while let Some(flag) = iter.next() {
            match flag.as_str() {
                "--seed" => args.seed = parse_value(&flag, iter.next())?,
                "--ticks" => args.ticks = parse_value(&flag, iter.next())?,
                "--interval" => args.interval = parse_value(&flag, iter.next())?,
                "--csv" => {
                    args.csv = Some(iter.next().ok_or("--csv needs a path")?);
                }
                "--no-csv" => args.csv = None,
                "--help" | "-h" => return Err(USAGE.to_owned()),
                other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
            }
        }
        if args.interval == 0 {
            return Err("--interval must be at least 1".to_owned());
        }
        Ok(args)
    }
}

const USAGE: &str = "usage: beaker-sim [--seed N] [--ticks N] [--interval N] [--csv PATH | --no-csv]";

fn parse_value(flag: &str, value: Option<String>) -> Result<u64, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} needs an unsigned integer, got `{value}`"))
}

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("beaker-sim: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = WorldConfig {
        seed: args.seed,
        ..WorldConfig::default()
    };
    let buckets = config.heat_buckets;
    let mut world = World::new(config)?;
    world.populate();

    println!(
        "seed {} | {} agents, {} resources | {} ticks",
        args.seed,
        world.population(),
        world.resource_count(),
        args.ticks
    );

    let mut csv = String::new();
    write_csv_header(&mut csv, buckets);

    for tick in 1..=args.ticks {
        world.tick();
        let stats = world.stats();
        write_csv_row(&mut csv, stats);
        if tick % args.interval == 0 || tick == args.ticks {
            println!(
                "tick {:>6}: pop={:>5} births={:>6} starved={:>6} eaten={:>6} consumed={:>7} heat={:?}",
                stats.tick,
                stats.population,
                stats.births,
                stats.deaths_starvation,
                stats.deaths_predation,
                stats.resources_consumed,
                stats.heat_counts,
            );
        }
        if world.population() == 0 {
            println!("population extinct at tick {}", stats.tick);
            break;
        }
    }

    if let Some(path) = &args.csv {
        fs::write(path, csv)?;
        println!("wrote {path}");
    }
    Ok(())
}

fn write_csv_header(out: &mut String, buckets: usize) {
    out.push_str("tick,population,resources,births,deaths_starvation,deaths_predation,resources_consumed,capacity_drops");
    for class in 0..buckets {
        let _ = write!(out, ",heat_{class}");
    }
    out.push('\n');
}

fn write_csv_row(out: &mut String, stats: &beaker_world::WorldStats) {
    let _ = write!(
        out,
        "{},{},{},{},{},{},{},{}",
        stats.tick,
        stats.population,
        stats.resources,
        stats.births,
        stats.deaths_starvation,
        stats.deaths_predation,
        stats.resources_consumed,
        stats.capacity_drops,
    );
    for count in &stats.heat_counts {
        let _ = write!(out, ",{count}");
    }
    out.push('\n');
}
