use anyhow::Context;

mod app;
mod error;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("gate-server error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let config =
        gate_config::GateConfig::load_with_dotenv().context("failed to load configuration")?;

    app::serve(config).await
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GATEHOUSE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
