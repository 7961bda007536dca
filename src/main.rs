use anyhow::Context;
use tracing_subscriber::util::SubscriberInitExt;
use whispering_maps::{app::App, config::get_configuration, telemetry::get_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::with(&config).await?;

    tracing::info!(address = %app.address(), "starting server");
    app.serve().await.context("The server stopped unexpectedly.")?;

    Ok(())
}
