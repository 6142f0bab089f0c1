mod driver;
mod error;

pub mod prelude {
    pub use crate::driver::{Page, PageOf, Session, SessionDriver, SessionOptions};
    pub use crate::error::DriverError;
}
