use std::future::Future;

use cartwheel_core::prelude::{PageOf, SessionDriver};

use crate::cli::LoadScenarioCli;

/// The business flow one simulated user runs against a fresh page.
///
/// The user id is only for building unique, human-distinguishable input data
/// such as a shipping name. It must never select different behaviour.
pub trait UserScenario<D: SessionDriver>: Send + Sync + 'static {
    fn run(
        &self,
        page: &mut PageOf<D>,
        user_id: u32,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// The builder for a load run definition.
///
/// This must be used by a scenario binary to describe the run before handing
/// it to [crate::run::run].
pub struct LoadRunDefinitionBuilder<D, S> {
    /// The name of the scenario, which should be unique within the test suite.
    ///
    /// Recommended value is `env!("CARGO_PKG_NAME")`.
    name: String,
    cli: LoadScenarioCli,
    default_users: Option<usize>,
    driver: Option<D>,
    scenario: Option<S>,
}

pub(crate) struct LoadRunDefinition<D, S> {
    pub name: String,
    pub users: usize,
    pub no_progress: bool,
    pub driver: D,
    pub scenario: S,
}

impl<D: SessionDriver, S: UserScenario<D>> LoadRunDefinitionBuilder<D, S> {
    /// Initialise a new load run definition from the scenario name and command
    /// line arguments. The recommended name is `env!("CARGO_PKG_NAME")` so the
    /// report matches the binary that produced it.
    pub fn new(name: &str, cli: LoadScenarioCli) -> Self {
        Self {
            name: name.to_string(),
            cli,
            default_users: None,
            driver: None,
            scenario: None,
        }
    }

    /// The number of users to simulate when the CLI does not specify one.
    pub fn with_default_users(mut self, users: usize) -> Self {
        self.default_users = Some(users);
        self
    }

    /// Set the session driver that opens a fresh browser session per user.
    pub fn use_driver(mut self, driver: D) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Set the scenario that every simulated user runs once.
    pub fn use_scenario(mut self, scenario: S) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub(crate) fn build(self) -> anyhow::Result<LoadRunDefinition<D, S>> {
        let users = self
            .cli
            .users
            .or(self.default_users)
            .ok_or_else(|| anyhow::anyhow!("No user count configured for this scenario"))?;
        anyhow::ensure!(users >= 1, "At least one simulated user is required");

        Ok(LoadRunDefinition {
            name: self.name,
            users,
            no_progress: self.cli.no_progress,
            driver: self
                .driver
                .ok_or_else(|| anyhow::anyhow!("No session driver configured"))?,
            scenario: self
                .scenario
                .ok_or_else(|| anyhow::anyhow!("No user scenario configured"))?,
        })
    }
}
