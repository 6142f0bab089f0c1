use cartwheel_core::prelude::{DriverError, Page};

const USERNAME_INPUT: &str = "#user-name";
const PASSWORD_INPUT: &str = "#password";
// The login button is an <input type="submit"> rather than a button.
const LOGIN_BUTTON: &str = "#login-button";
const ERROR_MESSAGE: &str = "[data-test='error']";

/// Page object for the storefront login page.
pub struct LoginPage<'a, P: Page> {
    page: &'a mut P,
}

impl<'a, P: Page> LoginPage<'a, P> {
    pub fn new(page: &'a mut P) -> Self {
        Self { page }
    }

    pub async fn navigate(&mut self, base_url: &str) -> Result<(), DriverError> {
        self.page.goto(base_url).await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), DriverError> {
        self.page.fill(USERNAME_INPUT, username).await?;
        self.page.fill(PASSWORD_INPUT, password).await?;
        self.page.click(LOGIN_BUTTON).await
    }

    /// The text of the login error banner, if one is showing.
    pub async fn error_message(&mut self) -> Result<String, DriverError> {
        self.page.text(ERROR_MESSAGE).await
    }
}
