use std::net::SocketAddr;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let addr: SocketAddr = std::env::var("SCHOOLTOUR_ADDR")
        .unwrap_or_else(|_| schooltour_common::DEFAULT_SERVER_ADDR.to_string())
        .parse()?;

    info!("Starting Tour of Schools mock backend on http://{}", addr);

    schooltour_server::serve(addr).await
}
