use std::time::Duration;

use cartwheel_core::prelude::{DriverError, Page};

const COMPLETE_HEADER: &str = ".complete-header";
const CONTINUE_BUTTON: &str = "#continue";
const ERROR_MESSAGE: &str = "[data-test='error']";
const FINISH_BUTTON: &str = "#finish";
const FIRST_NAME_INPUT: &str = "#first-name";
const LAST_NAME_INPUT: &str = "#last-name";
const POSTAL_CODE_INPUT: &str = "#postal-code";

/// Page object for the storefront checkout pages: step one, step two, and
/// completion.
pub struct CheckoutPage<'a, P: Page> {
    page: &'a mut P,
}

impl<'a, P: Page> CheckoutPage<'a, P> {
    pub fn new(page: &'a mut P) -> Self {
        Self { page }
    }

    pub async fn fill_shipping_info(
        &mut self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> Result<(), DriverError> {
        self.page.fill(FIRST_NAME_INPUT, first_name).await?;
        self.page.fill(LAST_NAME_INPUT, last_name).await?;
        self.page.fill(POSTAL_CODE_INPUT, postal_code).await
    }

    pub async fn continue_to_overview(&mut self) -> Result<(), DriverError> {
        self.page.click(CONTINUE_BUTTON).await
    }

    pub async fn wait_for_overview(&mut self, timeout: Duration) -> Result<(), DriverError> {
        self.page.wait_for_url("checkout-step-two.html", timeout).await
    }

    pub async fn finish(&mut self) -> Result<(), DriverError> {
        self.page.click(FINISH_BUTTON).await
    }

    pub async fn wait_for_complete(&mut self, timeout: Duration) -> Result<(), DriverError> {
        self.page
            .wait_for_url("checkout-complete.html", timeout)
            .await
    }

    pub async fn complete_header(&mut self) -> Result<String, DriverError> {
        self.page.text(COMPLETE_HEADER).await
    }

    /// The text of the checkout error banner, if one is showing.
    pub async fn error_message(&mut self) -> Result<String, DriverError> {
        self.page.text(ERROR_MESSAGE).await
    }
}
