//! Formatting and result-output helpers.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::error::TspResult;
use crate::solution::{Method, SolveOutcome};

/// Default file name for the plain-text results artifact.
pub const DEFAULT_REPORT_PATH: &str = "tsp_result.txt";

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Format an integer with comma thousands separators, e.g. `100,000`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}

/// The step log shown next to a result: the heuristic's trace plus a note on
/// what its iterations count.
///
/// Greedy has no trace, so its note comes first; for the other methods the
/// note follows the trace.
pub fn render_log(outcome: &SolveOutcome) -> String {
    let mut lines: Vec<String> = Vec::new();
    let note = format!(
        "Time Complexity (iterations): {}",
        outcome.method.iteration_meaning()
    );

    if outcome.method == Method::Greedy {
        lines.push(note);
    } else {
        if let Some(trace) = &outcome.trace {
            lines.extend(trace.iter().cloned());
        }
        lines.push(note);
    }

    lines.push(format!(
        "Total iterations: {}",
        format_thousands(outcome.iterations)
    ));

    lines.join("\n")
}

/// Full plain-text report: summary, iteration count, then the step log.
pub fn render_report(outcome: &SolveOutcome) -> String {
    format!(
        "{}\nIterations: {}\n{}\n",
        outcome.summary(),
        outcome.iterations,
        render_log(outcome)
    )
}

/// Save the plain-text report to a file.
pub fn save_report<P: AsRef<Path>>(outcome: &SolveOutcome, path: P) -> TspResult<()> {
    let mut file = File::create(path)?;
    file.write_all(render_report(outcome).as_bytes())?;
    Ok(())
}

/// Save the outcome as pretty-printed JSON.
pub fn save_json<P: AsRef<Path>>(outcome: &SolveOutcome, path: P) -> TspResult<()> {
    let json = serde_json::to_string_pretty(outcome)?;
    fs::write(path, json)?;
    Ok(())
}

/// Statistics about a finished solve.
pub struct SolveStatistics {
    pub method: Method,
    pub nodes: usize,
    pub iterations: u64,
    pub runtime: Duration,
    pub distance: f64,
}

impl SolveStatistics {
    /// Collect statistics from an outcome.
    pub fn from_outcome(outcome: &SolveOutcome) -> Self {
        SolveStatistics {
            method: outcome.method,
            nodes: outcome.tour.node_count(),
            iterations: outcome.iterations,
            runtime: outcome.runtime,
            distance: outcome.distance,
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Solve Statistics:
- Method: {}
- Nodes: {}
- Iterations: {}
- Runtime: {} ({} ms)
- Tour Length: {:.2}",
            self.method,
            self.nodes,
            format_thousands(self.iterations),
            format_duration(self.runtime),
            self.runtime.as_millis(),
            self.distance
        )
    }
}
