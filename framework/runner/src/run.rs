use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use cartwheel_core::prelude::SessionDriver;
use cartwheel_instruments::report::{self, LoadRunSummary};
use cartwheel_instruments::{Reporter, RunResult};

use crate::definition::{LoadRunDefinitionBuilder, UserScenario};
use crate::executor::Executor;
use crate::progress::start_progress;
use crate::user::simulate_user;

/// Everything a completed load run produced: the run identity, the per-unit
/// results in ascending user id order, and the derived summary.
#[derive(Debug, Clone)]
pub struct LoadRunReport {
    /// Chosen by the runner. Unique for each run.
    pub run_id: String,
    pub scenario_name: String,
    /// Unix timestamp in seconds of when the run started.
    pub started_at: i64,
    pub summary: LoadRunSummary,
    pub results: Vec<RunResult>,
}

impl LoadRunReport {
    /// The verdict: the run passed only if every unit passed.
    pub fn all_passed(&self) -> bool {
        self.summary.all_passed()
    }
}

/// Fan out the configured number of simulated users, wait for all of them
/// unconditionally, and aggregate their results.
///
/// A failing or panicking unit never cancels or blocks its siblings; failures
/// and caught panics only show up in the report. An `Err` from this function
/// means the harness itself could not run, not that units failed.
pub fn run<D, S>(definition: LoadRunDefinitionBuilder<D, S>) -> anyhow::Result<LoadRunReport>
where
    D: SessionDriver,
    S: UserScenario<D>,
{
    let definition = definition.build()?;
    let users =
        u32::try_from(definition.users).context("The user count exceeds the user id range")?;

    let run_id = nanoid::nanoid!(8);
    let started_at = chrono::Utc::now().timestamp();
    log::info!(
        "Running load scenario [{}]: {} with {} users",
        run_id,
        definition.name,
        definition.users
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    let executor = Arc::new(Executor::new(runtime));
    let reporter = Arc::new(Reporter::new());
    let driver = Arc::new(definition.driver);
    let scenario = Arc::new(definition.scenario);

    let progress = start_progress(definition.users, definition.no_progress);

    let overall = Instant::now();

    let mut handles = Vec::with_capacity(definition.users);
    for user_id in 1..=users {
        let executor = executor.clone();
        let reporter = reporter.clone();
        let driver = driver.clone();
        let scenario = scenario.clone();
        let progress = progress.clone();

        handles.push(
            std::thread::Builder::new()
                .name(format!("user-{}", user_id))
                .spawn(move || {
                    let started = Instant::now();
                    // A panicking scenario must end up in the report like any
                    // other failure, not abort the run.
                    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
                        executor.execute_in_place(simulate_user(&*driver, &*scenario, user_id))
                    }))
                    .unwrap_or_else(|payload| {
                        RunResult::fail(
                            user_id,
                            started.elapsed(),
                            format!("unit panicked: {}", panic_message(payload.as_ref())),
                        )
                    });

                    match &result.error {
                        None => {
                            log::info!("[user-{}] completed in {}ms", user_id, result.elapsed_ms)
                        }
                        Some(error) => log::warn!(
                            "[user-{}] failed after {}ms: {}",
                            user_id,
                            result.elapsed_ms,
                            error
                        ),
                    }

                    reporter.record(result);
                    progress.inc(1);
                })
                .context("Failed to spawn thread for simulated user")?,
        );
    }

    for handle in handles {
        // A failed join must not discard sibling results.
        if let Err(e) = handle.join() {
            log::error!("Failed to join a simulated user thread: {:?}", e);
        }
    }

    let total_elapsed = overall.elapsed();
    progress.finish_and_clear();

    let mut results = reporter.take_results();
    results.sort_by_key(|r| r.user_id);

    let summary = report::summarize(&results, total_elapsed);
    println!("{}", report::render(&summary, &results));

    Ok(LoadRunReport {
        run_id,
        scenario_name: definition.name,
        started_at,
        summary,
        results,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
