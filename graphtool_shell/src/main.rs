// SPDX-License-Identifier: MIT OR Apache-2.0
//! graphtool CLI entry point.

use clap::Parser;
use graphtool_shell::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout stays parseable with `-o json`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match graphtool_shell::run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
