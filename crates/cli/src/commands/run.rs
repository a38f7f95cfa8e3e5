//! `run` command implementation.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::error::CliError;
use crate::pipeline::{print_summary, LoadRun, LoadRunConfig};
use crate::plan::resolve_plan;

/// Execute the `run` command
pub async fn run_load(args: &RunArgs) -> Result<()> {
    let plan = resolve_plan(&args.plan)?;

    info!(
        endpoint = %plan.api.endpoint,
        facts = plan.facts.count,
        passes = plan.dispatch.passes,
        queue_capacity = plan.queue_capacity(),
        dry_run = args.dry_run,
        "Load plan ready"
    );

    let run = LoadRun::new(LoadRunConfig {
        plan,
        dry_run: args.dry_run,
        metrics_port: if args.metrics_port == 0 {
            None
        } else {
            Some(args.metrics_port)
        },
    });

    let shutdown_signal = setup_shutdown_signal();

    let report = tokio::select! {
        result = run.run() => result.context("Load run failed")?,
        _ = shutdown_signal => {
            warn!("Received shutdown signal, abandoning load run");
            return Ok(());
        }
    };

    info!(
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed,
        duration_secs = report.duration.as_secs_f64(),
        "All facts processed"
    );
    print_summary(&report);

    if args.fail_on_error && !report.is_clean() {
        return Err(CliError::SubmissionsFailed {
            failed: report.failed,
            attempted: report.attempted,
        }
        .into());
    }

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
