use thiserror::Error;

/// Failures surfaced by a session driver implementation.
///
/// The message of a [DriverError::Session] is reported verbatim because session
/// creation failures already carry the driver's own description of what went
/// wrong.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The driver could not create a browser session.
    #[error("{0}")]
    Session(String),

    /// A navigation did not complete.
    #[error("navigation to '{url}' failed: {message}")]
    Navigation { url: String, message: String },

    /// No element matched the selector on the current page.
    #[error("no element matching '{selector}' is present")]
    ElementNotFound { selector: String },

    /// An element was found but interacting with it failed.
    #[error("interaction with '{selector}' failed: {message}")]
    Interaction { selector: String, message: String },

    /// A bounded wait elapsed before the expected state materialised.
    #[error("timed out after {waited_ms}ms waiting for {condition}")]
    Timeout { condition: String, waited_ms: u64 },
}
