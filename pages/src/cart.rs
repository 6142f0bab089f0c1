use cartwheel_core::prelude::{DriverError, Page};

const CART_ITEM: &str = ".cart_item";
const CHECKOUT_BUTTON: &str = "#checkout";

/// Page object for the storefront cart page.
pub struct CartPage<'a, P: Page> {
    page: &'a mut P,
}

impl<'a, P: Page> CartPage<'a, P> {
    pub fn new(page: &'a mut P) -> Self {
        Self { page }
    }

    pub async fn item_count(&mut self) -> Result<usize, DriverError> {
        self.page.count(CART_ITEM).await
    }

    pub async fn begin_checkout(&mut self) -> Result<(), DriverError> {
        self.page.click(CHECKOUT_BUTTON).await
    }
}
