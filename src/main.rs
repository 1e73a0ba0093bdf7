use std::process;

use clap::Parser;
use devlog_sessions::Cli;

fn main() {
    // Initialize tracing subscriber with RUST_LOG environment variable support.
    // Default to "info" since the per-repository diagnostics are this tool's UI.
    // Write to stderr so logs don't interfere with --dry-run JSON on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");

        // Print the full error chain if available
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {err}");
            source = err.source();
        }

        process::exit(1);
    }
}
