//! Dependency initialization and wiring for the gateway.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::GatewayError;
use search_gateway_repository::{ElasticClient, EngineConfig, SearchEngineClient};

/// Default engine URL.
const DEFAULT_ELASTIC_URL: &str = "http://localhost:9200";

/// Default basic-auth username.
const DEFAULT_ELASTIC_USERNAME: &str = "elastic";

/// Default basic-auth password.
const DEFAULT_ELASTIC_PASSWORD: &str = "ELASTIC_PASSWORD";

/// Default index name.
const DEFAULT_ELASTIC_INDEX: &str = "employee";

/// Default port the gateway listens on.
const DEFAULT_GATEWAY_PORT: u16 = 8080;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The engine client shared by all route handlers.
    pub engine: Arc<dyn SearchEngineClient>,
    /// The address the gateway listens on.
    pub addr: SocketAddr,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTIC_URL`: engine URL (default: http://localhost:9200)
    /// - `ELASTIC_USERNAME`: basic-auth username (default: elastic)
    /// - `ELASTIC_PASSWORD`: basic-auth password (default: ELASTIC_PASSWORD)
    /// - `ELASTIC_INDEX`: index name (default: employee)
    /// - `GATEWAY_PORT`: listen port (default: 8080)
    /// - `GATEWAY_SEED_COUNT`: if set, seed that many synthetic documents
    ///
    /// Runs the startup health check and index creation; either failing is
    /// fatal per the process contract.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(GatewayError)` - If initialization fails
    pub async fn new() -> Result<Self, GatewayError> {
        let elastic_url =
            env::var("ELASTIC_URL").unwrap_or_else(|_| DEFAULT_ELASTIC_URL.to_string());
        let username =
            env::var("ELASTIC_USERNAME").unwrap_or_else(|_| DEFAULT_ELASTIC_USERNAME.to_string());
        let password =
            env::var("ELASTIC_PASSWORD").unwrap_or_else(|_| DEFAULT_ELASTIC_PASSWORD.to_string());
        let index = env::var("ELASTIC_INDEX").unwrap_or_else(|_| DEFAULT_ELASTIC_INDEX.to_string());
        let port = match env::var("GATEWAY_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| GatewayError::config(format!("Invalid GATEWAY_PORT: {}", e)))?,
            Err(_) => DEFAULT_GATEWAY_PORT,
        };

        info!(
            elastic_url = %elastic_url,
            index = %index,
            port,
            "Initializing dependencies"
        );

        let engine_config = EngineConfig::with_base_url(elastic_url)
            .with_credentials(username, password)
            .with_index(index);

        let client = ElasticClient::new(engine_config)
            .map_err(|e| GatewayError::config(format!("Failed to create engine client: {}", e)))?;

        // Verify the engine is reachable before serving traffic
        let healthy = client
            .health_check()
            .await
            .map_err(|e| GatewayError::config(format!("Engine health check failed: {}", e)))?;

        if !healthy {
            return Err(GatewayError::config("Engine is unhealthy"));
        }

        info!("Engine connection verified");

        client
            .ensure_index_exists()
            .await
            .map_err(|e| GatewayError::config(format!("Index creation failed: {}", e)))?;

        info!("Employee index ensured");

        if let Ok(value) = env::var("GATEWAY_SEED_COUNT") {
            let count = value
                .parse::<i64>()
                .map_err(|e| GatewayError::config(format!("Invalid GATEWAY_SEED_COUNT: {}", e)))?;
            client.seed_documents(1, count).await?;
        }

        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        Ok(Self {
            engine: Arc::new(client),
            addr,
        })
    }
}
