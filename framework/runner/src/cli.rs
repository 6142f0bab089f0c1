use clap::Parser;

/// Command line arguments for a Cartwheel load scenario.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct LoadScenarioCli {
    /// Base URL of the storefront under test
    #[clap(short, long, default_value = "https://www.saucedemo.com")]
    pub base_url: String,

    /// WebDriver endpoint used to create browser sessions
    #[clap(long, default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// The number of concurrent users to simulate
    #[clap(long)]
    pub users: Option<usize>,

    /// Run browser windows headed instead of headless
    #[clap(long, default_value = "false")]
    pub headed: bool,

    /// Do not show a progress bar on the CLI.
    ///
    /// Recommended for CI environments where the bar is just adding noise to
    /// the logs.
    #[clap(long, default_value = "false")]
    pub no_progress: bool,
}
