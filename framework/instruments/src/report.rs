mod users_table;

use std::time::Duration;

use tabled::settings::Style;
use tabled::Table;

use crate::report::users_table::UserRow;
use crate::RunResult;

/// Aggregate statistics for one completed load run.
///
/// Latency statistics are computed over all units, failed ones included, so
/// that timing reflects attempted duration rather than successful duration
/// only. `total_elapsed_ms` is the wall clock of the whole coordinated run,
/// which is not the sum of the per-unit times.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_elapsed_ms: u64,
    pub avg_elapsed_ms: f64,
    pub min_elapsed_ms: u64,
    pub max_elapsed_ms: u64,
}

impl LoadRunSummary {
    /// The verdict for the whole run: no unit may have failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Derive the summary for a completed result set.
///
/// Must only be called after every unit has joined. Pure: calling it twice on
/// the same inputs yields identical summaries.
pub fn summarize(results: &[RunResult], total_elapsed: Duration) -> LoadRunSummary {
    let total = results.len();
    let passed = results.iter().filter(|r| r.success).count();

    let (avg_elapsed_ms, min_elapsed_ms, max_elapsed_ms) = if total == 0 {
        (0.0, 0, 0)
    } else {
        let sum: u64 = results.iter().map(|r| r.elapsed_ms).sum();
        (
            sum as f64 / total as f64,
            results.iter().map(|r| r.elapsed_ms).min().unwrap_or(0),
            results.iter().map(|r| r.elapsed_ms).max().unwrap_or(0),
        )
    };

    LoadRunSummary {
        total,
        passed,
        failed: total - passed,
        total_elapsed_ms: total_elapsed.as_millis() as u64,
        avg_elapsed_ms,
        min_elapsed_ms,
        max_elapsed_ms,
    }
}

/// Render the summary header and the per-user table as plain text.
///
/// Units are listed in ascending user id order regardless of the order their
/// results arrived in the aggregate.
pub fn render(summary: &LoadRunSummary, results: &[RunResult]) -> String {
    let mut out = String::new();

    out.push_str("========================================\n");
    out.push_str("LOAD TEST RESULTS\n");
    out.push_str("========================================\n");
    out.push_str(&format!("Total users:   {}\n", summary.total));
    out.push_str(&format!("Passed:        {}\n", summary.passed));
    out.push_str(&format!("Failed:        {}\n", summary.failed));
    out.push_str(&format!("Total time:    {}ms\n", summary.total_elapsed_ms));
    out.push_str(&format!("Avg user time: {:.0}ms\n", summary.avg_elapsed_ms));
    out.push_str(&format!("Min user time: {}ms\n", summary.min_elapsed_ms));
    out.push_str(&format!("Max user time: {}ms\n", summary.max_elapsed_ms));

    let mut sorted: Vec<&RunResult> = results.iter().collect();
    sorted.sort_by_key(|r| r.user_id);

    let rows: Vec<UserRow> = sorted
        .into_iter()
        .map(|r| UserRow {
            user: r.user_id,
            outcome: if r.success { "PASS" } else { "FAIL" }.to_string(),
            elapsed_ms: r.elapsed_ms,
            detail: r.error.clone().unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::modern());

    out.push_str(&table.to_string());
    out.push('\n');
    out
}
