//! `awj-seed` -- bootstrap every catalog table in one go.
//!
//! Runs all loaders sequentially against `DATABASE_URL`, stopping at the
//! first failure. The per-table binaries (`seed-projects`, ...) run a
//! single loader each.

use std::process::ExitCode;

use awj_seed::Domain;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    awj_seed::cli::run(&Domain::ALL).await
}
