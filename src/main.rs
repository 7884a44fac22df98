//! Medicine lookup service.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               MEDICINE LOOKUP                 │
//!   POST             │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   /get_medicine_info──▶│  http   │──▶│  lookup  │──▶│  dataset  │  │
//!                    │  │ server  │   │ service  │   │ (in-mem)  │  │
//!   JSON response ◀──┼──│response │◀──│ outcome  │◀──│ records   │  │
//!                    │  └─────────┘   └──────────┘   └─────▲─────┘  │
//!                    │                                     │ once   │
//!                    │  config · observability · lifecycle  │        │
//!                    └─────────────────────────────────────┼────────┘
//!                                                medicine_data.csv
//! ```

use std::path::PathBuf;

use clap::Parser;
use medicine_lookup::config::resolve_config;
use medicine_lookup::lifecycle::{launch, signals, Shutdown};
use medicine_lookup::observability::logging;

#[derive(Parser)]
#[command(name = "medicine-lookup", version, about = "Medicine lookup HTTP service")]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref())?;
    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        dataset = %config.dataset.path.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    launch(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
