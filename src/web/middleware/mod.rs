//! Middleware for the Web API.

mod cors;
mod security;

pub use cors::create_cors_layer;
pub use security::security_headers;
