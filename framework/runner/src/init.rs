use crate::cli::LoadScenarioCli;
use clap::Parser;

/// Initialise logging and the CLI for a load scenario binary.
pub fn init() -> LoadScenarioCli {
    env_logger::init();

    LoadScenarioCli::parse()
}
