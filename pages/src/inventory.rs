use std::time::Duration;

use cartwheel_core::prelude::{DriverError, Page};

// Matches every add-to-cart button by its data-test attribute prefix.
const ADD_TO_CART_BUTTON: &str = "button[data-test^='add-to-cart']";
const INVENTORY_ITEM: &str = ".inventory_item";
const SHOPPING_CART_BADGE: &str = ".shopping_cart_badge";
const SHOPPING_CART_LINK: &str = ".shopping_cart_link";

/// Page object for the storefront inventory page.
pub struct InventoryPage<'a, P: Page> {
    page: &'a mut P,
}

impl<'a, P: Page> InventoryPage<'a, P> {
    pub fn new(page: &'a mut P) -> Self {
        Self { page }
    }

    /// Wait until the inventory page has been reached, as happens after a
    /// successful login.
    pub async fn wait_until_loaded(&mut self, timeout: Duration) -> Result<(), DriverError> {
        self.page.wait_for_url("inventory.html", timeout).await
    }

    pub async fn add_item_to_cart_by_index(&mut self, index: usize) -> Result<(), DriverError> {
        self.page.click_nth(ADD_TO_CART_BUTTON, index).await
    }

    pub async fn open_shopping_cart(&mut self) -> Result<(), DriverError> {
        self.page.click(SHOPPING_CART_LINK).await
    }

    pub async fn item_count(&mut self) -> Result<usize, DriverError> {
        self.page.count(INVENTORY_ITEM).await
    }

    /// The number shown on the cart badge. The badge is absent entirely when
    /// the cart is empty.
    pub async fn cart_badge_count(&mut self) -> Result<usize, DriverError> {
        match self.page.text(SHOPPING_CART_BADGE).await {
            Ok(text) => Ok(text.parse().unwrap_or(0)),
            Err(DriverError::ElementNotFound { .. }) => Ok(0),
            Err(e) => Err(e),
        }
    }
}
