//! fizzbuzz - Main CLI Entry Point

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use fizzbuzz::{
    cli::{Args, Config, Verbosity},
    printer,
    telemetry::{TelemetryCollector, TelemetryDisplay},
    FizzBuzzError,
};

fn main() -> ExitCode {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Reader closed stdout early (e.g. `fizzbuzz | head`)
            if let Some(fb) = e.downcast_ref::<FizzBuzzError>() {
                if fb.is_broken_pipe() {
                    return ExitCode::SUCCESS;
                }
            }

            if args.verbosity(Verbosity::Normal).show_diagnostics() {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.clone())?;

    if !config.display.color_output {
        colored::control::set_override(false);
    }

    let verbosity = args.verbosity(config.verbosity());

    if verbosity.show_summary() {
        let source = args
            .config
            .clone()
            .or_else(|| Config::default_path().filter(|p| p.exists()));
        match source {
            Some(path) => eprintln!("[CONFIG] Loaded {}", path.display()),
            None => eprintln!("[CONFIG] Using built-in defaults"),
        }
    }

    let mut telemetry = TelemetryCollector::new();
    {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        printer::run(&mut out, &mut telemetry, verbosity)?;
    }

    TelemetryDisplay::new(&telemetry, verbosity).display_summary();

    Ok(())
}
