//! Startup orchestration.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::lookup::LookupService;
use crate::observability::metrics;

/// Load the dataset, bind the listener and serve until `shutdown` fires.
///
/// Only binding and serving errors are returned; dataset problems are
/// reported per request.
pub async fn launch(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), std::io::Error> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let service = Arc::new(LookupService::load(&config.dataset.path));

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        dataset_available = service.is_available(),
        "Listening for connections"
    );

    HttpServer::new(config, service)
        .run(listener, shutdown.subscribe())
        .await
}
