// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitlint - Conventional commit linter and Git hook manager

use clap::Parser;
use commitlint::cli::{run, Cli};
use commitlint::ExitCode;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments; usage errors are runtime failures
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::RuntimeError
            } else {
                ExitCode::Success
            };
            std::process::exit(code.code());
        }
    };

    // Set up logging
    setup_logging(cli.debug);

    let quiet = cli.is_quiet();

    // Run the CLI
    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            if !quiet {
                eprintln!("{} {}", style("✗").red().bold(), e);
            }
            ExitCode::RuntimeError
        }
    };

    std::process::exit(code.code());
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commitlint=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
