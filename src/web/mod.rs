//! Web API module for anonboard.
//!
//! This module provides the HTTP surface of the board: the API routes,
//! the static view pages and the middleware stack.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use router::create_router;
pub use server::WebServer;
