use std::future::Future;
use std::time::Duration;

use crate::error::DriverError;

/// Options passed to [SessionDriver::create_session].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// The name of the unit of load that will own the session, in the form
    /// `user-N`.
    ///
    /// Drivers may use it to tag the session, for example as a window title or
    /// profile directory name, or ignore it entirely.
    pub label: String,
}

impl SessionOptions {
    pub fn for_user(user_id: u32) -> Self {
        Self {
            label: format!("user-{}", user_id),
        }
    }
}

/// A factory for isolated browser sessions.
///
/// The driver is shared read-only across concurrently running units, so a
/// created session must not hand out state that is reachable from any other
/// session.
pub trait SessionDriver: Send + Sync + 'static {
    type Session: Session;

    fn create_session(
        &self,
        options: SessionOptions,
    ) -> impl Future<Output = Result<Self::Session, DriverError>> + Send;
}

/// One isolated browser session.
///
/// A session is owned by exactly one unit of load, which must close it on
/// every exit path.
pub trait Session: Send + 'static {
    type Page: Page;

    fn new_page(&mut self) -> impl Future<Output = Result<Self::Page, DriverError>> + Send;

    fn close(self) -> impl Future<Output = Result<(), DriverError>> + Send;
}

/// A page within a session, exposing the UI interaction primitives that page
/// objects are written against.
///
/// Selectors are CSS. Every operation may fail with a [DriverError] after the
/// driver's own timeout.
pub trait Page: Send + 'static {
    fn goto(&mut self, url: &str) -> impl Future<Output = Result<(), DriverError>> + Send;

    fn current_url(&mut self) -> impl Future<Output = Result<String, DriverError>> + Send;

    fn click(&mut self, selector: &str)
        -> impl Future<Output = Result<(), DriverError>> + Send;

    /// Click the `index`-th element matching `selector`, 0-based.
    fn click_nth(
        &mut self,
        selector: &str,
        index: usize,
    ) -> impl Future<Output = Result<(), DriverError>> + Send;

    fn fill(
        &mut self,
        selector: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), DriverError>> + Send;

    fn text(&mut self, selector: &str)
        -> impl Future<Output = Result<String, DriverError>> + Send;

    /// The number of elements currently matching `selector`. Zero matches is
    /// not an error.
    fn count(&mut self, selector: &str)
        -> impl Future<Output = Result<usize, DriverError>> + Send;

    /// Wait until the current URL contains `fragment`, giving up with
    /// [DriverError::Timeout] after `timeout`.
    fn wait_for_url(
        &mut self,
        fragment: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<(), DriverError>> + Send;
}

/// The page type produced by a driver's sessions.
pub type PageOf<D> = <<D as SessionDriver>::Session as Session>::Page;
