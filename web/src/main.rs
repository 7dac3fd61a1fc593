use std::net::SocketAddr;

use expense_core::{ExpenseApi, ExpenseClient};
use time::UtcOffset;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expense_web::{build_router, AppConfig, AppState, DisplayOptions, Error, ReqwestTransport};

fn main() -> Result<(), Error> {
    // The local offset can only be read reliably before any other threads
    // exist, so do it before the runtime starts.
    let local_offset = UtcOffset::current_local_offset();

    dotenv::dotenv().ok();
    setup_logging();

    let utc_offset = local_offset.unwrap_or_else(|error| {
        tracing::warn!(%error, "could not determine local UTC offset, showing dates in UTC");
        UtcOffset::UTC
    });

    let config = AppConfig::from_env()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(config, DisplayOptions { utc_offset }))
}

async fn serve(config: AppConfig, display: DisplayOptions) -> Result<(), Error> {
    let transport = ReqwestTransport::new(config.request_timeout)?;
    let api = ExpenseApi::new(ExpenseClient::new(&config.api_url), transport);
    let router = build_router(AppState::new(api, display));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(api_url = %config.api_url, "expense web listening on http://{addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
