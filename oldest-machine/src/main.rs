use clap::Parser as _;
use machine_api_kubeapi::KubeApi;
use machine_reporter::OldestMachineReporter;

use cli::Cli;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let max_age = cli.max_age();
    tracing::info!(%max_age, namespace = %cli.namespace, "Starting oldest-machine");

    let kubeapi = match cli.kubeconfig {
        Some(path) => KubeApi::from_kubeconfig(path, cli.context).await,
        None => KubeApi::new().await,
    }
    .inspect_err(|err| tracing::error!(%err, "Failed to connect to the cluster"))?;

    let reporter = OldestMachineReporter::new(kubeapi, max_age).namespace(&cli.namespace);
    let report = reporter
        .report()
        .await
        .inspect_err(|err| tracing::error!(%err, "Failed to report on machines"))?;

    print!("{report}");

    Ok(())
}
