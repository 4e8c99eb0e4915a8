//! ascent-replay: run input through the headless host and print snapshots.
//!
//! Usage:
//!   ascent-replay run --script flight.json [--config sim.json] [--levels levels.json] [--ticks N]
//!   ascent-replay random --seed 7 --ticks 600 [--config sim.json] [--levels levels.json]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ascent_core::error::ConfigError;
use ascent_sim::input_script::InputScript;
use ascent_sim::levels::{default_levels, levels_from_path};
use ascent_sim::{SimConfig, SimulationEngine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "random" => cmd_random(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        error!("{err}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "ascent-replay: run rocket input through the headless host\n\
         \n\
         Commands:\n\
         \n\
         run       Replay a JSON input script\n\
         \n\
           --script <path>    Input script JSON (see demos/hop.json)\n\
           --ticks <N>        Stop after N ticks (optional, default: whole script)\n\
         \n\
         random    Play seeded random input\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --ticks <N>        Number of ticks (default: 600)\n\
         \n\
         Shared options:\n\
         \n\
           --config <path>    Simulation config JSON (optional)\n\
           --levels <path>    Level list JSON (optional, default: built-in levels)\n\
         \n\
         One JSON snapshot per tick is written to stdout. Set RUST_LOG to\n\
         control log output on stderr.\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_number<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
) -> Result<Option<T>, ConfigError> {
    match parse_flag(args, flag) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{flag} expects a number, got {raw:?}"))),
        None => Ok(None),
    }
}

fn build_engine(args: &[String]) -> Result<SimulationEngine, ConfigError> {
    let config = match parse_flag(args, "--config") {
        Some(path) => SimConfig::from_path(PathBuf::from(path))?,
        None => SimConfig::default(),
    };
    let levels = match parse_flag(args, "--levels") {
        Some(path) => levels_from_path(PathBuf::from(path))?,
        None => default_levels(),
    };
    SimulationEngine::with_levels(config, levels)
}

fn cmd_run(args: &[String]) -> Result<(), ConfigError> {
    let Some(script_path) = parse_flag(args, "--script") else {
        return Err(ConfigError::Invalid("run requires --script <path>".into()));
    };
    let script = InputScript::from_path(script_path)?;
    let limit = parse_number::<u64>(args, "--ticks")?.unwrap_or(script.total_ticks());

    let mut engine = build_engine(args)?;
    info!(script = script_path, ticks = limit, "replaying script");
    replay(&mut engine, script.frames().take(limit as usize), &mut io::stdout().lock())
}

fn cmd_random(args: &[String]) -> Result<(), ConfigError> {
    let seed = parse_number::<u64>(args, "--seed")?.unwrap_or(42);
    let ticks = parse_number::<u32>(args, "--ticks")?.unwrap_or(600);
    let script = InputScript::random(seed, ticks);

    let mut engine = build_engine(args)?;
    info!(seed, ticks, "playing random input");
    replay(&mut engine, script.frames(), &mut io::stdout().lock())
}

fn stdout_error(source: io::Error) -> ConfigError {
    ConfigError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

/// Write one JSON snapshot line per frame to `out`.
fn replay<W: Write>(
    engine: &mut SimulationEngine,
    frames: impl Iterator<Item = ascent_core::input::InputFrame>,
    out: &mut W,
) -> Result<(), ConfigError> {
    for frame in frames {
        let snapshot = engine.tick(&frame);
        serde_json::to_writer(&mut *out, &snapshot).map_err(|err| {
            if err.is_io() {
                stdout_error(io::Error::from(err))
            } else {
                ConfigError::Json(err)
            }
        })?;
        writeln!(out).map_err(stdout_error)?;
    }
    let time = engine.time();
    info!(
        ticks = time.tick,
        level = %engine.level(),
        state = ?engine.controller().state(),
        "replay finished"
    );
    Ok(())
}
