use tracing::info;
use tracing_subscriber::EnvFilter;

use search_gateway::config::Dependencies;
use search_gateway::http;
use search_gateway::GatewayError;

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let deps = Dependencies::new().await?;
    let app = http::router(deps.engine);

    let listener = tokio::net::TcpListener::bind(deps.addr).await?;
    info!(addr = %deps.addr, "Gateway listening");

    axum::serve(listener, app).await?;

    Ok(())
}
