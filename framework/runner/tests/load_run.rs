use std::time::Duration;

use cartwheel_runner::prelude::{
    run, LoadRunDefinitionBuilder, LoadScenarioCli, Page, UserScenario,
};
use cartwheel_sim::{SimDriver, SimPage};
use pretty_assertions::assert_eq;

const BASE: &str = "https://storefront.test";

fn sample_cli_cfg(users: usize) -> LoadScenarioCli {
    LoadScenarioCli {
        base_url: BASE.to_string(),
        webdriver_url: "http://localhost:9515".to_string(),
        users: Some(users),
        headed: false,
        no_progress: true,
    }
}

/// Touches the storefront entry point and nothing else.
struct VisitHomepage;

impl UserScenario<SimDriver> for VisitHomepage {
    async fn run(&self, page: &mut SimPage, _user_id: u32) -> anyhow::Result<()> {
        page.goto(BASE).await?;
        Ok(())
    }
}

/// Fails deliberately for one unit, succeeds for every other.
struct FailForUser {
    user_id: u32,
}

impl UserScenario<SimDriver> for FailForUser {
    async fn run(&self, page: &mut SimPage, user_id: u32) -> anyhow::Result<()> {
        page.goto(BASE).await?;
        if user_id == self.user_id {
            anyhow::bail!("deliberately injected fault");
        }
        Ok(())
    }
}

/// Panics instead of returning an error for one unit.
struct PanicForUser {
    user_id: u32,
}

impl UserScenario<SimDriver> for PanicForUser {
    async fn run(&self, page: &mut SimPage, user_id: u32) -> anyhow::Result<()> {
        page.goto(BASE).await?;
        if user_id == self.user_id {
            panic!("scripted unit panic");
        }
        Ok(())
    }
}

/// A handful of page operations, so per-operation latency adds up to a
/// measurable per-unit duration.
struct SlowBrowse;

impl UserScenario<SimDriver> for SlowBrowse {
    async fn run(&self, page: &mut SimPage, _user_id: u32) -> anyhow::Result<()> {
        page.goto(BASE).await?;
        page.current_url().await?;
        page.count(".inventory_item").await?;
        Ok(())
    }
}

#[test]
fn ten_users_produce_ten_distinct_results() {
    let report = run(LoadRunDefinitionBuilder::new(
        "ten_users_produce_ten_distinct_results",
        sample_cli_cfg(10),
    )
    .use_driver(SimDriver::new())
    .use_scenario(VisitHomepage))
    .unwrap();

    assert_eq!(report.results.len(), 10);
    let ids: Vec<u32> = report.results.iter().map(|r| r.user_id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    assert!(report
        .results
        .iter()
        .all(|r| r.success && r.error.is_none()));
    assert!(report.all_passed());
    assert_eq!(report.summary.total, 10);
    assert_eq!(report.summary.passed, 10);
    assert_eq!(report.summary.failed, 0);
}

#[test]
fn a_single_user_run_works() {
    let report = run(
        LoadRunDefinitionBuilder::new("a_single_user_run_works", sample_cli_cfg(1))
            .use_driver(SimDriver::new())
            .use_scenario(VisitHomepage),
    )
    .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].user_id, 1);
    assert!(report.all_passed());
}

#[test]
fn zero_users_is_rejected() {
    let result = run(
        LoadRunDefinitionBuilder::new("zero_users_is_rejected", sample_cli_cfg(0))
            .use_driver(SimDriver::new())
            .use_scenario(VisitHomepage),
    );

    assert!(result.is_err());
}

#[test]
fn a_session_fault_fails_only_the_labelled_user() {
    let driver = SimDriver::new().fail_session("user-7", "browser launch failed");

    let report = run(LoadRunDefinitionBuilder::new(
        "a_session_fault_fails_only_the_labelled_user",
        sample_cli_cfg(10),
    )
    .use_driver(driver.clone())
    .use_scenario(VisitHomepage))
    .unwrap();

    let seventh = &report.results[6];
    assert_eq!(seventh.user_id, 7);
    assert!(!seventh.success);
    assert_eq!(seventh.error.as_deref(), Some("browser launch failed"));

    assert!(report
        .results
        .iter()
        .filter(|r| r.user_id != 7)
        .all(|r| r.success));
    assert!(!report.all_passed());
    assert_eq!(report.summary.passed, 9);
    assert_eq!(report.summary.failed, 1);

    // Units that did get a session released it, fault or no fault.
    assert_eq!(driver.open_sessions(), 0);
}

#[test]
fn a_scenario_fault_does_not_leak_into_sibling_units() {
    let driver = SimDriver::new();

    let report = run(LoadRunDefinitionBuilder::new(
        "a_scenario_fault_does_not_leak_into_sibling_units",
        sample_cli_cfg(5),
    )
    .use_driver(driver.clone())
    .use_scenario(FailForUser { user_id: 3 }))
    .unwrap();

    for result in &report.results {
        if result.user_id == 3 {
            assert!(!result.success);
            let error = result.error.as_deref().unwrap_or_default();
            assert!(
                error.contains("deliberately injected fault"),
                "unexpected error: {error}"
            );
        } else {
            assert!(result.success, "user-{} was affected", result.user_id);
        }
    }
    assert!(!report.all_passed());

    // The failing unit's session was still released.
    assert_eq!(driver.open_sessions(), 0);
}

#[test]
fn a_panicking_unit_is_contained_and_reported() {
    let driver = SimDriver::new();

    let report = run(LoadRunDefinitionBuilder::new(
        "a_panicking_unit_is_contained_and_reported",
        sample_cli_cfg(5),
    )
    .use_driver(driver.clone())
    .use_scenario(PanicForUser { user_id: 2 }))
    .unwrap();

    assert_eq!(report.results.len(), 5);
    let second = &report.results[1];
    assert_eq!(second.user_id, 2);
    assert!(!second.success);
    let error = second.error.as_deref().unwrap_or_default();
    assert!(
        error.contains("unit panicked") && error.contains("scripted unit panic"),
        "unexpected error: {error}"
    );

    assert!(report
        .results
        .iter()
        .filter(|r| r.user_id != 2)
        .all(|r| r.success));
    assert!(!report.all_passed());
    assert_eq!(report.summary.passed, 4);
    assert_eq!(report.summary.failed, 1);

    // The panicked unit's session was released along with the rest.
    assert_eq!(driver.open_sessions(), 0);
}

#[test]
fn a_user_count_beyond_the_id_range_is_rejected() {
    let result = run(LoadRunDefinitionBuilder::new(
        "a_user_count_beyond_the_id_range_is_rejected",
        sample_cli_cfg(u32::MAX as usize + 1),
    )
    .use_driver(SimDriver::new())
    .use_scenario(VisitHomepage));

    assert!(result.is_err());
}

#[test]
fn concurrent_units_overlap_in_wall_clock_time() {
    // Five driver operations per unit (create, page, goto, url, count) at
    // 30ms each puts every unit well above 100ms.
    let driver = SimDriver::new().with_op_latency(Duration::from_millis(30));

    let report = run(LoadRunDefinitionBuilder::new(
        "concurrent_units_overlap_in_wall_clock_time",
        sample_cli_cfg(4),
    )
    .use_driver(driver)
    .use_scenario(SlowBrowse))
    .unwrap();

    assert!(report.all_passed());
    let unit_sum: u64 = report.results.iter().map(|r| r.elapsed_ms).sum();
    assert!(
        report.summary.total_elapsed_ms <= unit_sum,
        "no overlap: wall clock {}ms vs unit sum {}ms",
        report.summary.total_elapsed_ms,
        unit_sum
    );
    assert!(report.results.iter().all(|r| r.elapsed_ms >= 30));
}
