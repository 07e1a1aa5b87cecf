//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::Result;
use num_bigint::BigUint;
use tracing::{debug, info};

use bigfib_cli::output::write_to_file;
use bigfib_cli::presenter::CliPresenter;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bigfib_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    // The engine accepts any index, so bounded runtime has to be enforced
    // here, before calling it.
    if config.max_index > 0 && config.n > BigUint::from(config.max_index) {
        anyhow::bail!(
            "index {} exceeds --max-index {}",
            config.n,
            config.max_index
        );
    }

    debug!(n = %config.n, "Starting calculation");
    let start = Instant::now();
    let value = bigfib_core::fibonacci(config.n.clone())?;
    let duration = start.elapsed();
    info!(?duration, "Calculation complete");

    let presenter = CliPresenter::new(config.verbose, config.quiet);
    presenter.present_result(&config.n, &value, duration, config.details);

    if let Some(ref path) = config.output {
        write_to_file(path, &value)
            .map_err(|e| anyhow::anyhow!("failed to write {path}: {e}"))?;
        if !config.quiet {
            println!("Result written to {path}");
        }
    }

    Ok(())
}
