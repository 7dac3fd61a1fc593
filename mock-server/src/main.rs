use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = mock_server::listen_addr(|name| std::env::var(name).ok());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("mock expense API listening on {addr}");
    mock_server::run(listener).await
}
