use cartwheel_pages::config::StorefrontConfig;
use cartwheel_pages::flows;
use cartwheel_runner::prelude::*;
use cartwheel_webdriver::{WebDriver, WebDriverPage};

/// One full pass of the checkout happy path per simulated user.
struct CheckoutScenario {
    config: StorefrontConfig,
}

impl UserScenario<WebDriver> for CheckoutScenario {
    async fn run(&self, page: &mut WebDriverPage, user_id: u32) -> anyhow::Result<()> {
        flows::run_checkout(page, user_id, &self.config).await
    }
}

fn main() -> CartwheelResult<()> {
    let cli = init();

    let config = StorefrontConfig::default().with_base_url(&cli.base_url);
    let driver = WebDriver::new(&cli.webdriver_url).with_headless(!cli.headed);

    let definition = LoadRunDefinitionBuilder::new(env!("CARGO_PKG_NAME"), cli)
        .with_default_users(10)
        .use_driver(driver)
        .use_scenario(CheckoutScenario { config });

    let report = run(definition)?;

    anyhow::ensure!(
        report.all_passed(),
        "{} of {} simulated users failed",
        report.summary.failed,
        report.summary.total
    );

    Ok(())
}
