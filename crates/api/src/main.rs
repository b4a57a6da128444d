//! Service entry point.

use std::process::ExitCode;

use api::config::Config;
use api::error::StartupError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let addr = config.addr();

    tracing::info!(
        %addr,
        version = api::routes::home::SERVICE_VERSION,
        "starting {}",
        api::routes::home::SERVICE_NAME
    );
    tracing::info!(rust_version = facts::rust_version(), "toolchain");
    tracing::info!(platform = %facts::platform_version(), "platform");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;
    api::serve(listener).await.map_err(StartupError::Serve)
}

#[tokio::main]
async fn main() -> ExitCode {
    facts::mark_process_start();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "fatal server error");
            ExitCode::FAILURE
        }
    }
}
