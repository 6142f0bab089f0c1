use std::time::Instant;

use cartwheel_core::prelude::{Session, SessionDriver, SessionOptions};
use cartwheel_instruments::RunResult;

use crate::definition::UserScenario;

/// Run one simulated user from session acquisition to session release.
///
/// Never lets a failure escape: session creation, navigation, assertion, and
/// unexpected faults are all converted into the returned [RunResult]. The
/// elapsed time covers the full lifetime of the unit's session, teardown
/// included.
pub(crate) async fn simulate_user<D, S>(driver: &D, scenario: &S, user_id: u32) -> RunResult
where
    D: SessionDriver,
    S: UserScenario<D>,
{
    let started = Instant::now();
    let outcome = run_once(driver, scenario, user_id).await;
    let elapsed = started.elapsed();

    match outcome {
        Ok(()) => RunResult::pass(user_id, elapsed),
        Err(e) => RunResult::fail(user_id, elapsed, format!("{e:#}")),
    }
}

async fn run_once<D, S>(driver: &D, scenario: &S, user_id: u32) -> anyhow::Result<()>
where
    D: SessionDriver,
    S: UserScenario<D>,
{
    let mut session = driver
        .create_session(SessionOptions::for_user(user_id))
        .await?;

    // The session must be released whether or not the scenario succeeded, so
    // hold the scenario outcome until close has run.
    let scenario_outcome = async {
        let mut page = session.new_page().await?;
        scenario.run(&mut page, user_id).await
    }
    .await;

    if let Err(close_err) = session.close().await {
        if scenario_outcome.is_ok() {
            return Err(close_err.into());
        }
        log::warn!(
            "[user-{}] failed to close session after scenario failure: {}",
            user_id,
            close_err
        );
    }

    scenario_outcome
}
