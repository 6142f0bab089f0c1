//! An in-process simulated storefront implementing the Cartwheel session
//! driver traits.
//!
//! The simulated site mirrors the storefront the checkout flow is written
//! against: a login page, an inventory of six items, a cart, and a three-step
//! checkout. Deterministic fault injection and configurable per-operation
//! latency make it suitable for exercising the harness without a browser.

mod page;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use cartwheel_core::prelude::{DriverError, Session, SessionDriver, SessionOptions};

pub use page::SimPage;

#[derive(Debug)]
pub(crate) struct DriverState {
    op_latency: Duration,
    valid_username: String,
    valid_password: String,
    catalog_size: usize,
    session_faults: Mutex<HashMap<String, String>>,
    open_sessions: AtomicUsize,
}

impl DriverState {
    pub(crate) async fn pause(&self) {
        if !self.op_latency.is_zero() {
            tokio::time::sleep(self.op_latency).await;
        }
    }

    pub(crate) fn login_is_valid(&self, username: &str, password: &str) -> bool {
        username == self.valid_username && password == self.valid_password
    }

    pub(crate) fn catalog_size(&self) -> usize {
        self.catalog_size
    }
}

/// A session driver backed by the simulated storefront.
///
/// Cloning is cheap and clones observe the same fault configuration and open
/// session count.
#[derive(Clone)]
pub struct SimDriver {
    inner: Arc<DriverState>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DriverState {
                op_latency: Duration::ZERO,
                valid_username: "standard_user".to_string(),
                valid_password: "secret_sauce".to_string(),
                catalog_size: 6,
                session_faults: Mutex::new(HashMap::new()),
                open_sessions: AtomicUsize::new(0),
            }),
        }
    }

    /// Sleep this long on every driver operation, standing in for network and
    /// browser I/O.
    pub fn with_op_latency(mut self, latency: Duration) -> Self {
        self.state_mut().op_latency = latency;
        self
    }

    /// Change the one credential pair the simulated storefront accepts.
    pub fn with_valid_login(mut self, username: &str, password: &str) -> Self {
        let state = self.state_mut();
        state.valid_username = username.to_string();
        state.valid_password = password.to_string();
        self
    }

    /// Make session creation fail with `message` for the unit whose session
    /// options carry `label`.
    pub fn fail_session(self, label: &str, message: &str) -> Self {
        self.inner
            .session_faults
            .lock()
            .insert(label.to_string(), message.to_string());
        self
    }

    /// The number of sessions created but not yet closed. Zero after a run in
    /// which every unit released its session.
    pub fn open_sessions(&self) -> usize {
        self.inner.open_sessions.load(Ordering::SeqCst)
    }

    fn state_mut(&mut self) -> &mut DriverState {
        Arc::get_mut(&mut self.inner).expect("SimDriver must be configured before it is cloned")
    }
}

impl SessionDriver for SimDriver {
    type Session = SimSession;

    async fn create_session(&self, options: SessionOptions) -> Result<SimSession, DriverError> {
        self.inner.pause().await;

        let fault = self.inner.session_faults.lock().get(&options.label).cloned();
        if let Some(message) = fault {
            return Err(DriverError::Session(message));
        }

        self.inner.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(SimSession {
            driver: self.inner.clone(),
            closed: false,
        })
    }
}

/// One isolated session against the simulated storefront.
#[derive(Debug)]
pub struct SimSession {
    driver: Arc<DriverState>,
    closed: bool,
}

impl Session for SimSession {
    type Page = SimPage;

    async fn new_page(&mut self) -> Result<SimPage, DriverError> {
        self.driver.pause().await;
        Ok(SimPage::blank(self.driver.clone()))
    }

    async fn close(mut self) -> Result<(), DriverError> {
        self.driver.pause().await;
        self.driver.open_sessions.fetch_sub(1, Ordering::SeqCst);
        self.closed = true;
        Ok(())
    }
}

impl Drop for SimSession {
    fn drop(&mut self) {
        // A session abandoned without close, as happens when a unit panics,
        // still gives up its slot.
        if !self.closed {
            self.driver.open_sessions.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
