use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use cartwheel_core::prelude::{DriverError, Page};

use crate::DriverState;

/// The views of the simulated storefront, matching the URLs of the real site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Login,
    Inventory,
    Cart,
    CheckoutStepOne,
    CheckoutStepTwo,
    Complete,
}

impl View {
    fn path(&self) -> &'static str {
        match self {
            View::Login => "/",
            View::Inventory => "/inventory.html",
            View::Cart => "/cart.html",
            View::CheckoutStepOne => "/checkout-step-one.html",
            View::CheckoutStepTwo => "/checkout-step-two.html",
            View::Complete => "/checkout-complete.html",
        }
    }
}

#[derive(Debug, Default)]
struct PageState {
    base: String,
    view: Option<View>,
    username: String,
    password: String,
    cart: BTreeSet<usize>,
    first_name: String,
    last_name: String,
    postal_code: String,
    error_banner: Option<String>,
}

/// A page handle into the simulated storefront.
///
/// The page is exclusively owned by one unit, so its state only ever changes
/// through this handle.
pub struct SimPage {
    driver: Arc<DriverState>,
    state: Arc<Mutex<PageState>>,
}

impl SimPage {
    pub(crate) fn blank(driver: Arc<DriverState>) -> Self {
        Self {
            driver,
            state: Arc::new(Mutex::new(PageState::default())),
        }
    }

    fn missing(selector: &str) -> DriverError {
        DriverError::ElementNotFound {
            selector: selector.to_string(),
        }
    }
}

impl Page for SimPage {
    async fn goto(&mut self, url: &str) -> Result<(), DriverError> {
        self.driver.pause().await;
        let mut state = self.state.lock();
        // A fresh navigation discards any in-page state.
        *state = PageState {
            base: url.trim_end_matches('/').to_string(),
            view: Some(View::Login),
            ..Default::default()
        };
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String, DriverError> {
        self.driver.pause().await;
        let state = self.state.lock();
        match state.view {
            Some(view) => Ok(format!("{}{}", state.base, view.path())),
            None => Ok("about:blank".to_string()),
        }
    }

    async fn click(&mut self, selector: &str) -> Result<(), DriverError> {
        self.driver.pause().await;
        let mut state = self.state.lock();
        match (state.view, selector) {
            (Some(View::Login), "#login-button") => {
                if self.driver.login_is_valid(&state.username, &state.password) {
                    state.view = Some(View::Inventory);
                    state.error_banner = None;
                } else {
                    state.error_banner = Some(
                        "Epic sadface: Username and password do not match any user in this service"
                            .to_string(),
                    );
                }
                Ok(())
            }
            (Some(View::Inventory), ".shopping_cart_link") => {
                state.view = Some(View::Cart);
                Ok(())
            }
            (Some(View::Cart), "#checkout") => {
                state.view = Some(View::CheckoutStepOne);
                Ok(())
            }
            (Some(View::CheckoutStepOne), "#continue") => {
                let missing_field = [
                    (&state.first_name, "First Name"),
                    (&state.last_name, "Last Name"),
                    (&state.postal_code, "Postal Code"),
                ]
                .into_iter()
                .find(|(value, _)| value.is_empty())
                .map(|(_, field)| field);

                match missing_field {
                    Some(field) => {
                        state.error_banner = Some(format!("Error: {} is required", field))
                    }
                    None => {
                        state.view = Some(View::CheckoutStepTwo);
                        state.error_banner = None;
                    }
                }
                Ok(())
            }
            (Some(View::CheckoutStepTwo), "#finish") => {
                state.view = Some(View::Complete);
                Ok(())
            }
            (Some(View::Complete), "#back-to-products") => {
                state.view = Some(View::Inventory);
                Ok(())
            }
            _ => Err(Self::missing(selector)),
        }
    }

    async fn click_nth(&mut self, selector: &str, index: usize) -> Result<(), DriverError> {
        self.driver.pause().await;
        let mut state = self.state.lock();
        match (state.view, selector) {
            (Some(View::Inventory), "button[data-test^='add-to-cart']")
                if index < self.driver.catalog_size() =>
            {
                state.cart.insert(index);
                Ok(())
            }
            _ => Err(Self::missing(selector)),
        }
    }

    async fn fill(&mut self, selector: &str, value: &str) -> Result<(), DriverError> {
        self.driver.pause().await;
        let mut state = self.state.lock();
        let slot = match (state.view, selector) {
            (Some(View::Login), "#user-name") => &mut state.username,
            (Some(View::Login), "#password") => &mut state.password,
            (Some(View::CheckoutStepOne), "#first-name") => &mut state.first_name,
            (Some(View::CheckoutStepOne), "#last-name") => &mut state.last_name,
            (Some(View::CheckoutStepOne), "#postal-code") => &mut state.postal_code,
            _ => return Err(Self::missing(selector)),
        };
        *slot = value.to_string();
        Ok(())
    }

    async fn text(&mut self, selector: &str) -> Result<String, DriverError> {
        self.driver.pause().await;
        let state = self.state.lock();
        match (state.view, selector) {
            (_, "[data-test='error']") => {
                state.error_banner.clone().ok_or_else(|| Self::missing(selector))
            }
            (Some(View::Inventory), ".shopping_cart_badge") if !state.cart.is_empty() => {
                Ok(state.cart.len().to_string())
            }
            (Some(View::CheckoutStepTwo), ".summary_total_label") => {
                Ok("Total: $43.18".to_string())
            }
            (Some(View::Complete), ".complete-header") => {
                Ok("Thank you for your order!".to_string())
            }
            _ => Err(Self::missing(selector)),
        }
    }

    async fn count(&mut self, selector: &str) -> Result<usize, DriverError> {
        self.driver.pause().await;
        let state = self.state.lock();
        let count = match (state.view, selector) {
            (Some(View::Inventory), ".inventory_item") => self.driver.catalog_size(),
            (Some(View::Cart), ".cart_item") => state.cart.len(),
            _ => 0,
        };
        Ok(count)
    }

    async fn wait_for_url(&mut self, fragment: &str, timeout: Duration) -> Result<(), DriverError> {
        self.driver.pause().await;
        // The page is exclusively owned, so its URL cannot change while we
        // wait; one check decides.
        let state = self.state.lock();
        let url = match state.view {
            Some(view) => format!("{}{}", state.base, view.path()),
            None => "about:blank".to_string(),
        };
        if url.contains(fragment) {
            Ok(())
        } else {
            Err(DriverError::Timeout {
                condition: format!("url to contain '{}'", fragment),
                waited_ms: timeout.as_millis() as u64,
            })
        }
    }
}
