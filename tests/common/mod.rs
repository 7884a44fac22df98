//! Shared utilities for integration tests.

use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use medicine_lookup::{HttpServer, LookupService, ServiceConfig, Shutdown};
use tempfile::NamedTempFile;
use tokio::net::TcpListener;

pub const SAMPLE_CSV: &str = "Medicine Name,Composition,Uses,Side_effects\n\
                              Paracetamol,Para+Caf,Fever,Nausea\n\
                              Paracinol,Para+X,Pain,Drowsiness\n";

/// Write CSV contents to a temporary file.
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Start a server loading its dataset from `path`, on an ephemeral port.
pub async fn start_server(path: &Path) -> (SocketAddr, Shutdown) {
    let mut config = ServiceConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.dataset.path = path.to_path_buf();

    let service = Arc::new(LookupService::load(&config.dataset.path));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, service);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn lookup_url(addr: SocketAddr) -> String {
    format!("http://{}/get_medicine_info", addr)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
