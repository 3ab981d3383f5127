use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use workload_probe::DEFAULT_WORKLOAD_GROUP_VERSION;
use workload_probe::DEFAULT_WORKLOAD_KIND;
use workload_probe::ListFailurePolicy;
use workload_probe::PollConfig;
use workload_probe::WorkloadRef;
use workload_probe::parse_interval;
use workload_probe_kubeapi::KubeApi;

mod args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = args::Args::parse();
    tracing::info!("Starting workload-probe-agent");

    let workload = args.workload()?;
    let config = args.poll_config()?;

    let api = match &args.kubeconfig {
        Some(path) => KubeApi::from_kubeconfig(path).await?,
        None => KubeApi::new().await?,
    };

    // failures are logged where they happen
    workload_probe_poller::probe(&api, workload, config, shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C"),
        Err(err) => {
            // Without a signal handler the process can only be killed.
            tracing::error!(%err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
