//! rotmin - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufRead;

use rotmin::{
    cli::{Args, Commands, Verbosity},
    config::Config,
    input::parse_sequence,
    logging::init_logger,
    output::render,
};

/// Sequences run by the `demo` subcommand
const DEMO_SEQUENCES: &[&[i64]] = &[&[2, 2, 2, 0, 2, 2], &[5, 6, 7, 7, 8, 1, 1, 2, 3, 4, 4]];

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    args.apply_overrides(&mut config);

    let verbosity = if args.quiet || args.verbose > 0 {
        args.verbosity()
    } else {
        Verbosity::from_name(&config.output.default_verbosity).unwrap_or(Verbosity::Normal)
    };
    init_logger(verbosity);

    if !config.output.color {
        colored::control::set_override(false);
    }

    log::debug!(
        "strategy={} validate={} format={}",
        config.search.strategy.as_str(),
        config.search.validate,
        config.output.format.as_str()
    );

    match &args.command {
        Some(Commands::Demo) => run_demo(&config),
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        None => match args.sequence_text() {
            Some(text) => run_text(&config, &text),
            None => run_stdin(&config),
        },
    }
}

/// Search one already-parsed sequence and print the result
fn run_sequence(config: &Config, sequence: &[i64]) -> Result<()> {
    let outcome = config.finder().find(sequence)?;
    let rendered = render(outcome, sequence, config.output.format, config.output.color)?;
    println!("{}", rendered);
    Ok(())
}

fn run_text(config: &Config, text: &str) -> Result<()> {
    let sequence = parse_sequence(text).context("Failed to parse sequence")?;
    run_sequence(config, &sequence)
}

/// Treat each non-empty stdin line as one sequence
fn run_stdin(config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    for (i, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let sequence =
            parse_sequence(&line).with_context(|| format!("Failed to parse line {}", i + 1))?;
        run_sequence(config, &sequence)?;
    }
    Ok(())
}

fn run_demo(config: &Config) -> Result<()> {
    for sequence in DEMO_SEQUENCES {
        log::info!("Searching {:?}", sequence);
        run_sequence(config, sequence)?;
    }
    Ok(())
}
