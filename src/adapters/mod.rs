// Adapters layer: concrete implementations for external systems (venue API client, HTTP server).

pub mod http;
pub mod server;
