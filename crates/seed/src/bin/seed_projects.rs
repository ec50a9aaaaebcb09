use std::process::ExitCode;

use awj_seed::Domain;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    awj_seed::cli::run(&[Domain::Projects]).await
}
