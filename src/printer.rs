//! The counting loop: classify 1..=100 and write one line per integer

use std::io::Write;
use std::time::Instant;

use crate::classifier::classify;
use crate::cli::Verbosity;
use crate::errors::Result;
use crate::telemetry::{TelemetryCollector, TelemetryEvent};

/// First integer printed
pub const FIRST: u32 = 1;

/// Last integer printed (inclusive)
pub const LAST: u32 = 100;

/// Write every line for `FIRST..=LAST` to `out`, in order.
///
/// Each classification is recorded in `telemetry`. At `VeryVerbose` each one
/// is also traced on stderr; stdout content never depends on verbosity.
pub fn run<W: Write>(
    out: &mut W,
    telemetry: &mut TelemetryCollector,
    verbosity: Verbosity,
) -> Result<()> {
    let start = Instant::now();

    for n in FIRST..=LAST {
        let classification = classify(n);
        writeln!(out, "{}", classification)?;

        if verbosity.show_trace() {
            eprintln!("[CLASSIFY] {} -> {}", n, classification);
        }

        telemetry.record(TelemetryEvent::Classified(classification));
    }

    out.flush()?;

    telemetry.record(TelemetryEvent::RunCompleted {
        duration: start.elapsed(),
    });

    Ok(())
}

/// Collect the full output into a `String`
pub fn render() -> Result<String> {
    let mut buf = Vec::new();
    let mut telemetry = TelemetryCollector::new();
    run(&mut buf, &mut telemetry, Verbosity::Quiet)?;
    String::from_utf8(buf).map_err(|e| crate::FizzBuzzError::Generic(e.to_string()))
}
