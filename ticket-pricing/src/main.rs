use std::io;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // stdout carries the prompts; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match ticket_pricing::run_session(io::stdin().lock(), io::stdout().lock()) {
        Ok(total) => {
            tracing::info!(total, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
