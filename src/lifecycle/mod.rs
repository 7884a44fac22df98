//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Logging → Metrics → Load dataset → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → server stops accepting → drain → exit
//!
//! Signals (signals.rs):
//!     Ctrl+C / SIGTERM → trigger shutdown
//! ```
//!
//! # Design Decisions
//! - A dataset load failure degrades the service instead of aborting startup
//! - Listener binds last, after the dataset state is known

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::launch;
