//! Web server for anonboard.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::db::Database;
use crate::{AnonboardError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Assembled router.
    router: Router,
}

impl WebServer {
    /// Create a new web server from configuration and an open database.
    pub fn new(config: &Config, db: Database) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| AnonboardError::Config(format!("invalid server address: {e}")))?;

        let app_state = Arc::new(AppState::new(db));
        let router = create_router(app_state, &config.web);

        Ok(Self { addr, router })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("Web server listening on {}", self.addr);

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_parses_address() {
        let db = Database::open_in_memory().await.unwrap();
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;

        let server = WebServer::new(&config, db).unwrap();
        assert_eq!(server.addr().port(), 0);
    }

    #[tokio::test]
    async fn test_new_rejects_bad_host() {
        let db = Database::open_in_memory().await.unwrap();
        let mut config = Config::default();
        config.server.host = "not a host".to_string();

        assert!(WebServer::new(&config, db).is_err());
    }
}
