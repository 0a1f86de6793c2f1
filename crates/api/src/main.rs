//! API server entry point.

use std::process::ExitCode;

use api::Config;
use api::config::LogFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Initialize tracing
    init_tracing(&config);

    tracing::info!(
        service = api::SERVICE_NAME,
        version = api::VERSION,
        addr = %config.addr(),
        "starting API server"
    );

    // 3. Bind and serve until a shutdown signal
    match api::server::start(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server failed");
            ExitCode::FAILURE
        }
    }
}
