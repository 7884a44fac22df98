//! Medicine lookup service library.
//!
//! Loads a medicine CSV once at startup and answers case-insensitive
//! substring lookups over HTTP.

pub mod config;
pub mod dataset;
pub mod http;
pub mod lifecycle;
pub mod lookup;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use lookup::LookupService;
