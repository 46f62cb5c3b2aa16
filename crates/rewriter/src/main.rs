use std::process;

use clap::Parser;
use common::Config;
use rewriter::EXIT_FAILURE;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let report = match rewriter::run(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to rename facts: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };

    let code = report.exit_code(config.fail_on());
    if code != 0 {
        warn!(
            "Output written to '{}', but diagnostics violate --fail-on {:?}",
            config.dest_dir().display(),
            config.fail_on()
        );
        process::exit(code);
    }
    info!("Output written to '{}'", config.dest_dir().display());
}
