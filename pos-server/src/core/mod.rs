//! Core Module
//!
//! Configuration, shared state and server lifecycle.

mod config;
mod server;
mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
