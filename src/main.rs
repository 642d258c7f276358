//! tickgate - Rate-Gated Terminal Animations & Lap Timing
//!
//! CLI driver for the pollable animation components and the lap timer.

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::time::{Duration, Instant};
use tickgate::{Dotter, Spinner, Timer};

/// Fallback defaults when no config file is in play.
#[derive(Debug, Clone)]
struct Defaults {
    spinner_hz: f64,
    dotter_hz: f64,
    poll_interval: Duration,
}

#[cfg(feature = "config")]
fn defaults() -> Defaults {
    let config = tickgate::config::Config::load().unwrap_or_else(|err| {
        log::warn!("ignoring config file: {}", err);
        tickgate::config::Config::default()
    });
    Defaults {
        spinner_hz: config.spinner_hz,
        dotter_hz: config.dotter_hz,
        poll_interval: Duration::from_millis(config.poll_interval_ms),
    }
}

#[cfg(not(feature = "config"))]
fn defaults() -> Defaults {
    Defaults {
        spinner_hz: 10.0,
        dotter_hz: 5.0,
        poll_interval: Duration::from_millis(1),
    }
}

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let defaults = defaults();

    let matches = Command::new("tickgate")
        .version(tickgate::VERSION)
        .about("Rate-gated terminal animations and a lap timer")
        .subcommand_required(true)
        .subcommand(
            Command::new("spin")
                .about("Run the rotating spinner animation")
                .arg(frequency_arg())
                .arg(duration_arg()),
        )
        .subcommand(
            Command::new("dots")
                .about("Run the sliding dot animation")
                .arg(frequency_arg())
                .arg(duration_arg()),
        )
        .subcommand(
            Command::new("laps")
                .about("Record evenly spaced laps and print them")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .help("Number of laps to record")
                        .value_parser(clap::value_parser!(u32).range(1..))
                        .default_value("5"),
                )
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .help("Milliseconds between laps")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("1000"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("spin", sub)) => {
            let hz = frequency(sub, defaults.spinner_hz)?;
            let mut spinner = Spinner::new(hz)?;
            run_animation(duration(sub)?, defaults.poll_interval, || spinner.poll())?;
        }
        Some(("dots", sub)) => {
            let hz = frequency(sub, defaults.dotter_hz)?;
            let mut dotter = Dotter::new(hz)?;
            run_animation(duration(sub)?, defaults.poll_interval, || dotter.poll())?;
        }
        Some(("laps", sub)) => {
            let count = *sub.get_one::<u32>("count").expect("defaulted");
            let interval =
                Duration::from_millis(*sub.get_one::<u64>("interval").expect("defaulted"));
            run_laps(count, interval);
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn frequency_arg() -> Arg {
    Arg::new("frequency")
        .short('f')
        .long("frequency")
        .help("Animation frequency in frames per second")
        .value_parser(clap::value_parser!(f64))
}

fn duration_arg() -> Arg {
    Arg::new("duration")
        .short('d')
        .long("duration")
        .help("How long to run, in seconds")
        .value_parser(clap::value_parser!(f64))
        .default_value("5")
}

fn frequency(sub: &ArgMatches, default_hz: f64) -> Result<f64> {
    let hz = sub.get_one::<f64>("frequency").copied().unwrap_or(default_hz);
    if !hz.is_finite() || hz <= 0.0 {
        anyhow::bail!("frequency must be positive and finite, got {}", hz);
    }
    Ok(hz)
}

fn duration(sub: &ArgMatches) -> Result<Duration> {
    let secs = *sub.get_one::<f64>("duration").expect("defaulted");
    if !secs.is_finite() || secs < 0.0 {
        anyhow::bail!("duration must be non-negative and finite, got {}", secs);
    }
    Ok(Duration::from_secs_f64(secs))
}

/// Drive a pollable animation for `run_for`, then move past the animation
/// line so the shell prompt does not land on top of it.
fn run_animation<F>(run_for: Duration, poll_interval: Duration, mut poll: F) -> Result<()>
where
    F: FnMut() -> tickgate::Result<bool>,
{
    let deadline = Instant::now() + run_for;
    let mut frames: u64 = 0;
    while Instant::now() < deadline {
        if poll()? {
            frames += 1;
        }
        std::thread::sleep(poll_interval);
    }
    println!();
    log::debug!("emitted {} frames over {:?}", frames, run_for);
    Ok(())
}

fn run_laps(count: u32, interval: Duration) {
    let mut timer = Timer::new();
    timer.start();
    for i in 1..=count {
        std::thread::sleep(interval);
        let lap = timer.lap();
        println!("lap {:>3}: {:>9.3}s", i, lap.as_secs_f64());
    }
    println!("total  : {:>9.3}s", timer.elapsed().as_secs_f64());
}
