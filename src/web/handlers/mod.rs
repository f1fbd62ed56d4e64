//! API handlers for the Web API.
//!
//! Every outcome is surfaced as a plain text token in the response body
//! with HTTP 200; clients assert on the literal strings, not on status
//! codes. The tokens are part of the API contract and must not change.

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

use axum::response::{IntoResponse, Response};

use crate::board::{BoardService, ReplyService};
use crate::db::Database;
use crate::AnonboardError;

/// State shared by all request handlers.
///
/// Holds the two services, each constructed once around the long-lived
/// database handle.
pub struct AppState {
    /// Thread operations.
    pub boards: BoardService,
    /// Reply operations.
    pub replies: ReplyService,
}

impl AppState {
    /// Create the application state from an open database.
    pub fn new(db: Database) -> Self {
        Self {
            boards: BoardService::new(db.clone()),
            replies: ReplyService::new(db),
        }
    }
}

/// Map a service error to its literal response token.
///
/// Control outcomes get their contract tokens; anything else is logged and
/// reported as the generic `error` body.
pub(super) fn error_token(err: AnonboardError) -> Response {
    let token = match err {
        AnonboardError::ThreadNotFound => "no thread found",
        AnonboardError::ReplyNotFound => "no reply found",
        AnonboardError::IncorrectPassword => "incorrect password",
        AnonboardError::Validation(msg) => {
            tracing::warn!(error = %msg, "Rejected invalid request");
            "error"
        }
        other => {
            tracing::error!(error = %other, "Request failed");
            "error"
        }
    };
    token.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_error_token_mapping() {
        assert_eq!(
            body_text(error_token(AnonboardError::ThreadNotFound)).await,
            "no thread found"
        );
        assert_eq!(
            body_text(error_token(AnonboardError::ReplyNotFound)).await,
            "no reply found"
        );
        assert_eq!(
            body_text(error_token(AnonboardError::IncorrectPassword)).await,
            "incorrect password"
        );
        assert_eq!(
            body_text(error_token(AnonboardError::Validation("x".into()))).await,
            "error"
        );
        assert_eq!(
            body_text(error_token(AnonboardError::Database("down".into()))).await,
            "error"
        );
    }

    #[tokio::test]
    async fn test_error_token_status_is_ok() {
        let response = error_token(AnonboardError::ThreadNotFound);
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
