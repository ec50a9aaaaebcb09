//! Shared entry point for the seed binaries.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::Domain;
use crate::config::SeedConfig;
use crate::runner::run_all;

/// Install the `fmt` subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "awj_seed=info,awj_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load `.env`, read the configuration and run `domains` sequentially.
///
/// Exit code 0 when every loader committed, 1 otherwise.
pub async fn run(domains: &[Domain]) -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match run_all(&config, domains).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Seeding failed");
            ExitCode::FAILURE
        }
    }
}
