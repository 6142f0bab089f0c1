//! A session driver backed by a WebDriver endpoint such as chromedriver,
//! geckodriver, or a Selenium grid.
//!
//! Every simulated user gets its own WebDriver session, which is the
//! protocol's unit of isolation: separate cookies, storage, and windows.

use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};

use cartwheel_core::prelude::{DriverError, Page, Session, SessionDriver, SessionOptions};

const URL_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct WebDriver {
    webdriver_url: String,
    headless: bool,
}

impl WebDriver {
    pub fn new(webdriver_url: &str) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            headless: true,
        }
    }

    /// Sessions are headless by default, which is what a load run wants; pass
    /// `false` to watch the browser windows.
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    fn capabilities(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut caps = serde_json::Map::new();
        if self.headless {
            caps.insert(
                "goog:chromeOptions".to_string(),
                serde_json::json!({ "args": ["--headless=new", "--disable-gpu"] }),
            );
            caps.insert(
                "moz:firefoxOptions".to_string(),
                serde_json::json!({ "args": ["-headless"] }),
            );
        }
        caps
    }
}

impl SessionDriver for WebDriver {
    type Session = WebDriverSession;

    async fn create_session(
        &self,
        options: SessionOptions,
    ) -> Result<WebDriverSession, DriverError> {
        log::debug!("Creating a WebDriver session for {}", options.label);
        let client = ClientBuilder::native()
            .capabilities(self.capabilities())
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| {
                DriverError::Session(format!("failed to create WebDriver session: {e}"))
            })?;
        Ok(WebDriverSession { client })
    }
}

pub struct WebDriverSession {
    client: Client,
}

impl Session for WebDriverSession {
    type Page = WebDriverPage;

    async fn new_page(&mut self) -> Result<WebDriverPage, DriverError> {
        // A WebDriver session starts with one window; the page handle shares
        // the underlying session.
        Ok(WebDriverPage {
            client: self.client.clone(),
        })
    }

    async fn close(self) -> Result<(), DriverError> {
        self.client
            .close()
            .await
            .map_err(|e| DriverError::Session(format!("failed to close WebDriver session: {e}")))
    }
}

pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    async fn element(&self, selector: &str) -> Result<Element, DriverError> {
        self.client
            .find(Locator::Css(selector))
            .await
            .map_err(|_| DriverError::ElementNotFound {
                selector: selector.to_string(),
            })
    }

    fn interaction_error(selector: &str, e: fantoccini::error::CmdError) -> DriverError {
        DriverError::Interaction {
            selector: selector.to_string(),
            message: e.to_string(),
        }
    }
}

impl Page for WebDriverPage {
    async fn goto(&mut self, url: &str) -> Result<(), DriverError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| DriverError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    async fn current_url(&mut self) -> Result<String, DriverError> {
        // Failing to read the URL means the session itself has broken.
        self.client
            .current_url()
            .await
            .map(|url| url.to_string())
            .map_err(|e| DriverError::Session(format!("lost WebDriver session: {e}")))
    }

    async fn click(&mut self, selector: &str) -> Result<(), DriverError> {
        let element = self.element(selector).await?;
        element
            .click()
            .await
            .map_err(|e| Self::interaction_error(selector, e))?;
        Ok(())
    }

    async fn click_nth(&mut self, selector: &str, index: usize) -> Result<(), DriverError> {
        let elements = self
            .client
            .find_all(Locator::Css(selector))
            .await
            .map_err(|e| Self::interaction_error(selector, e))?;
        let element =
            elements
                .into_iter()
                .nth(index)
                .ok_or_else(|| DriverError::ElementNotFound {
                    selector: format!("{}:nth({})", selector, index),
                })?;
        element
            .click()
            .await
            .map_err(|e| Self::interaction_error(selector, e))?;
        Ok(())
    }

    async fn fill(&mut self, selector: &str, value: &str) -> Result<(), DriverError> {
        let element = self.element(selector).await?;
        element
            .clear()
            .await
            .map_err(|e| Self::interaction_error(selector, e))?;
        element
            .send_keys(value)
            .await
            .map_err(|e| Self::interaction_error(selector, e))?;
        Ok(())
    }

    async fn text(&mut self, selector: &str) -> Result<String, DriverError> {
        let element = self.element(selector).await?;
        element
            .text()
            .await
            .map_err(|e| Self::interaction_error(selector, e))
    }

    async fn count(&mut self, selector: &str) -> Result<usize, DriverError> {
        self.client
            .find_all(Locator::Css(selector))
            .await
            .map(|elements| elements.len())
            .map_err(|e| Self::interaction_error(selector, e))
    }

    async fn wait_for_url(&mut self, fragment: &str, timeout: Duration) -> Result<(), DriverError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let url = self.current_url().await?;
            if url.contains(fragment) {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(DriverError::Timeout {
                    condition: format!("url to contain '{}'", fragment),
                    waited_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(URL_POLL_INTERVAL).await;
        }
    }
}
