//! Scripted end-to-end flows composed from the page objects.
//!
//! Each flow is a single fallible pipeline: the first unmet expectation
//! short-circuits the remaining steps and becomes the flow's error.

use anyhow::ensure;

use cartwheel_core::prelude::Page;

use crate::config::StorefrontConfig;
use crate::{CartPage, CheckoutPage, InventoryPage, LoginPage};

const COMPLETE_MESSAGE: &str = "Thank you for your order!";

/// The full checkout happy path for one simulated user: login, add items,
/// verify the cart, and advance through checkout to the completion message.
///
/// The user id only feeds the shipping first name, so the data each unit
/// enters stays human-distinguishable.
pub async fn run_checkout<P: Page>(
    page: &mut P,
    user_id: u32,
    config: &StorefrontConfig,
) -> anyhow::Result<()> {
    let mut login = LoginPage::new(page);
    login.navigate(&config.base_url).await?;
    login
        .login(&config.credentials.username, &config.credentials.password)
        .await?;

    let mut inventory = InventoryPage::new(page);
    inventory.wait_until_loaded(config.navigation_timeout).await?;
    for index in 0..config.items_to_add {
        inventory.add_item_to_cart_by_index(index).await?;
    }
    inventory.open_shopping_cart().await?;

    let mut cart = CartPage::new(page);
    let in_cart = cart.item_count().await?;
    ensure!(
        in_cart == config.items_to_add,
        "expected {} items in the cart, found {}",
        config.items_to_add,
        in_cart
    );
    cart.begin_checkout().await?;

    let mut checkout = CheckoutPage::new(page);
    checkout
        .fill_shipping_info(
            &format!("User{}", user_id),
            &config.shipping.last_name,
            &config.shipping.postal_code,
        )
        .await?;
    checkout.continue_to_overview().await?;
    checkout.wait_for_overview(config.navigation_timeout).await?;
    checkout.finish().await?;
    checkout.wait_for_complete(config.navigation_timeout).await?;

    let header = checkout.complete_header().await?;
    ensure!(
        header == COMPLETE_MESSAGE,
        "expected the completion message '{}', but the page reads '{}'",
        COMPLETE_MESSAGE,
        header
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::prelude::{Session, SessionDriver, SessionOptions};
    use cartwheel_sim::{SimDriver, SimPage};

    const BASE: &str = "https://storefront.test";

    fn sim_config() -> StorefrontConfig {
        StorefrontConfig::default().with_base_url(BASE)
    }

    async fn fresh_page(driver: &SimDriver) -> SimPage {
        let mut session = driver
            .create_session(SessionOptions::for_user(1))
            .await
            .unwrap();
        session.new_page().await.unwrap()
    }

    #[tokio::test]
    async fn checkout_flow_reaches_the_completion_message() {
        let driver = SimDriver::new();
        let mut page = fresh_page(&driver).await;

        run_checkout(&mut page, 1, &sim_config()).await.unwrap();
    }

    #[tokio::test]
    async fn checkout_flow_fails_on_bad_credentials() {
        let driver = SimDriver::new();
        let mut page = fresh_page(&driver).await;

        let mut config = sim_config();
        config.credentials.password = "not_the_password".to_string();

        let err = run_checkout(&mut page, 1, &config).await.unwrap_err();
        assert!(
            err.to_string().contains("inventory.html"),
            "unexpected error: {err:#}"
        );
    }

    #[tokio::test]
    async fn login_page_surfaces_the_error_banner() {
        let driver = SimDriver::new();
        let mut page = fresh_page(&driver).await;

        let mut login = LoginPage::new(&mut page);
        login.navigate(BASE).await.unwrap();
        login.login("standard_user", "wrong").await.unwrap();
        let banner = login.error_message().await.unwrap();
        assert!(banner.starts_with("Epic sadface"), "banner: {banner}");
    }

    #[tokio::test]
    async fn cart_badge_counts_added_items() {
        let driver = SimDriver::new();
        let mut page = fresh_page(&driver).await;

        let mut login = LoginPage::new(&mut page);
        login.navigate(BASE).await.unwrap();
        login.login("standard_user", "secret_sauce").await.unwrap();

        let mut inventory = InventoryPage::new(&mut page);
        inventory
            .wait_until_loaded(std::time::Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(inventory.cart_badge_count().await.unwrap(), 0);
        assert_eq!(inventory.item_count().await.unwrap(), 6);

        inventory.add_item_to_cart_by_index(0).await.unwrap();
        inventory.add_item_to_cart_by_index(1).await.unwrap();
        assert_eq!(inventory.cart_badge_count().await.unwrap(), 2);
    }
}
