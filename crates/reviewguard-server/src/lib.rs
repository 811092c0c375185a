//! ReviewGuard HTTP server library
//!
//! Router construction, configuration, and shared state live here so
//! integration tests can drive the API without binding a socket; the binary
//! in `main.rs` wires them to a listener.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
