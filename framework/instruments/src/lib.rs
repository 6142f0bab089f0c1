mod reporter;
mod result;

pub mod report;

pub use reporter::Reporter;
pub use result::RunResult;
