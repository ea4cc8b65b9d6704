pub mod config;
pub mod constants;
pub mod countdown;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod schema;
pub mod server;
pub mod view;

// Application use cases and the ports they depend on
pub mod app;
// Adapters implementing those ports
pub mod infra;
