use std::time::Duration;

/// Externally supplied parameters for the storefront under test.
///
/// Carried explicitly through the scenario instead of living in compiled-in
/// globals, so tests can substitute every value.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub shipping: ShippingDefaults,
    /// How many catalog items each simulated user puts in the cart.
    pub items_to_add: usize,
    /// Bound on waits for a navigation to settle.
    pub navigation_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Fixed shipping field values. The first name is not here because it is
/// derived from the user id, keeping the entered data distinguishable between
/// units.
#[derive(Debug, Clone)]
pub struct ShippingDefaults {
    pub last_name: String,
    pub postal_code: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com".to_string(),
            credentials: Credentials {
                username: "standard_user".to_string(),
                password: "secret_sauce".to_string(),
            },
            shipping: ShippingDefaults {
                last_name: "LoadTest".to_string(),
                postal_code: "12345".to_string(),
            },
            items_to_add: 2,
            navigation_timeout: Duration::from_secs(10),
        }
    }
}

impl StorefrontConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}
