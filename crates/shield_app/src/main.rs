mod platform;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use platform::app::{run_app, AppConfig};
use platform::logging::{self, LogDestination};

/// Scan URLs for phishing and malware via the Link Shield service.
#[derive(Debug, Parser)]
#[command(name = "shield", version, about)]
struct Cli {
    /// URL to scan immediately at startup (deep link).
    #[arg(long)]
    url: Option<String>,

    /// Directory holding persisted scan history and preferences.
    #[arg(long, default_value = ".shield")]
    state_dir: PathBuf,

    /// Override the scan service endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "file")]
    log: LogArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogArg {
    File,
    Term,
    Both,
}

fn main() {
    let cli = Cli::parse();

    logging::initialize(match cli.log {
        LogArg::File => LogDestination::File,
        LogArg::Term => LogDestination::Terminal,
        LogArg::Both => LogDestination::Both,
    });

    run_app(AppConfig {
        deep_link: cli.url,
        state_dir: cli.state_dir,
        endpoint: cli.endpoint,
    });
}
