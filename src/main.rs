use hostname_greeter::{Config, SystemEnvironment};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> hostname_greeter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::default();

    let (addr, server) = hostname_greeter::bind(config.addr(), SystemEnvironment).map_err(|err| {
        error!(error = %err, "could not start server");
        err
    })?;

    info!(%addr, "starting server");
    server.await;

    Ok(())
}
