//! Telemetry for a fizzbuzz run
//!
//! Collects one event per classified integer and renders a short summary
//! on stderr when running verbosely.

use std::time::Duration;

use colored::Colorize;

use crate::classifier::Classification;
use crate::cli::Verbosity;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    Classified(Classification),
    /// Emitted once the loop has written and flushed every line
    RunCompleted { duration: Duration },
}

/// Per-classification tally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryStats {
    pub fizz: usize,
    pub buzz: usize,
    pub fizzbuzz: usize,
    pub numbers: usize,
    pub lines: usize,
}

/// Telemetry collector
#[derive(Debug, Clone, Default)]
pub struct TelemetryCollector {
    events: Vec<TelemetryEvent>,
    stats: TelemetryStats,
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event
    pub fn record(&mut self, event: TelemetryEvent) {
        if let TelemetryEvent::Classified(classification) = &event {
            self.stats.lines += 1;
            match classification {
                Classification::Fizz => self.stats.fizz += 1,
                Classification::Buzz => self.stats.buzz += 1,
                Classification::FizzBuzz => self.stats.fizzbuzz += 1,
                Classification::Number(_) => self.stats.numbers += 1,
            }
        }

        self.events.push(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        self.stats.clone()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Duration of the most recent completed run, if any
    pub fn run_duration(&self) -> Option<Duration> {
        self.events.iter().rev().find_map(|event| match event {
            TelemetryEvent::RunCompleted { duration } => Some(*duration),
            TelemetryEvent::Classified(_) => None,
        })
    }
}

/// Summary display on stderr
pub struct TelemetryDisplay<'a> {
    collector: &'a TelemetryCollector,
    verbosity: Verbosity,
}

impl<'a> TelemetryDisplay<'a> {
    pub fn new(collector: &'a TelemetryCollector, verbosity: Verbosity) -> Self {
        Self {
            collector,
            verbosity,
        }
    }

    /// Build the summary text
    pub fn render_summary(&self) -> String {
        let stats = self.collector.get_stats();
        let duration = match self.collector.run_duration() {
            Some(d) => format!("{:?}", d),
            None => "incomplete".to_string(),
        };

        let mut out = String::new();
        out.push_str(&format!("\n{}\n", "Run Summary".bold()));
        out.push_str("─────────────────────────────────────\n");
        out.push_str(&format!("Duration:   {}\n", duration));
        out.push_str(&format!("Lines:      {}\n", stats.lines));
        out.push_str(&format!("FizzBuzz:   {}\n", stats.fizzbuzz));
        out.push_str(&format!("Fizz:       {}\n", stats.fizz));
        out.push_str(&format!("Buzz:       {}\n", stats.buzz));
        out.push_str(&format!("Numbers:    {}\n", stats.numbers));
        out
    }

    /// Display summary statistics if verbosity asks for it
    pub fn display_summary(&self) {
        if self.verbosity.show_summary() {
            eprint!("{}", self.render_summary());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_collector_creation() {
        let collector = TelemetryCollector::new();
        assert_eq!(collector.event_count(), 0);
        assert_eq!(collector.get_stats(), TelemetryStats::default());
        assert!(collector.run_duration().is_none());
    }

    #[test]
    fn test_record_classifications() {
        let mut collector = TelemetryCollector::new();
        for n in 1..=15 {
            collector.record(TelemetryEvent::Classified(classify(n)));
        }

        let stats = collector.get_stats();
        assert_eq!(stats.lines, 15);
        assert_eq!(stats.fizzbuzz, 1);
        assert_eq!(stats.fizz, 4);
        assert_eq!(stats.buzz, 2);
        assert_eq!(stats.numbers, 8);
    }

    #[test]
    fn test_run_completed_does_not_count_as_line() {
        let mut collector = TelemetryCollector::new();
        collector.record(TelemetryEvent::RunCompleted {
            duration: Duration::from_micros(250),
        });

        assert_eq!(collector.event_count(), 1);
        assert_eq!(collector.get_stats().lines, 0);
        assert_eq!(collector.run_duration(), Some(Duration::from_micros(250)));
    }

    #[test]
    fn test_run_duration_uses_latest_run() {
        let mut collector = TelemetryCollector::new();
        collector.record(TelemetryEvent::RunCompleted {
            duration: Duration::from_millis(5),
        });
        collector.record(TelemetryEvent::Classified(classify(1)));
        collector.record(TelemetryEvent::RunCompleted {
            duration: Duration::from_millis(7),
        });

        assert_eq!(collector.run_duration(), Some(Duration::from_millis(7)));
    }

    #[test]
    fn test_render_summary_reports_run_duration() {
        colored::control::set_override(false);
        let mut collector = TelemetryCollector::new();
        for n in 1..=5 {
            collector.record(TelemetryEvent::Classified(classify(n)));
        }
        collector.record(TelemetryEvent::RunCompleted {
            duration: Duration::from_millis(3),
        });

        let display = TelemetryDisplay::new(&collector, Verbosity::Verbose);
        let summary = display.render_summary();
        assert!(summary.contains("Run Summary"));
        assert!(summary.contains("Duration:   3ms"));
        assert!(summary.contains("Lines:      5"));
        assert!(summary.contains("Buzz:       1"));
    }

    #[test]
    fn test_render_summary_without_completion() {
        let collector = TelemetryCollector::new();
        let summary = TelemetryDisplay::new(&collector, Verbosity::Verbose).render_summary();
        assert!(summary.contains("Duration:   incomplete"));
    }
}
