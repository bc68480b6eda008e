use anyhow::Result;
use clap::Parser;

use edly_curl::output::ConsoleLogger;
use edly_curl::run;
use edly_curl::types::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    let logger = ConsoleLogger::from_verbosity(cli.verbose, !cli.no_color);

    let result = run(
        &cli.url,
        cli.method.as_deref(),
        cli.body.as_deref(),
        &cli.headers,
        &logger,
    )
    .await;

    // The failure has already been logged; only the exit status is left to set.
    if result.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
