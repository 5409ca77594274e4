//! Todo smoke runner
//!
//! Walks a running gateway through sign-up, login, token checks and task CRUD
//! and exits non-zero if any step answers with an unexpected status.

use clap::Parser;
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use todo_smoke::{Config, Scenario};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env(), "todo-smoke");

    let config = Config::parse();
    let report = Scenario::new(&config.gateway)?.run().await;

    println!("{report}");
    if !report.is_success() {
        eyre::bail!("{} of {} steps failed", report.failed(), report.steps.len());
    }
    Ok(())
}
