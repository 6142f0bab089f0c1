mod cli;
mod definition;
mod executor;
mod init;
mod progress;
mod run;
mod types;
mod user;

pub mod prelude {
    pub use crate::cli::LoadScenarioCli;
    pub use crate::definition::{LoadRunDefinitionBuilder, UserScenario};
    pub use crate::init::init;
    pub use crate::run::{run, LoadRunReport};
    pub use crate::types::CartwheelResult;

    pub use cartwheel_core::prelude::*;
    pub use cartwheel_instruments::report::LoadRunSummary;
    pub use cartwheel_instruments::RunResult;
}
