//! Request DTOs for the Web API.
//!
//! Bodies arrive as `application/x-www-form-urlencoded`. All fields default
//! to empty strings so a missing field flows through the same validation
//! path as an empty one instead of failing extraction.

use serde::Deserialize;

/// Body of POST /api/threads/:board.
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    /// Thread body.
    #[serde(default)]
    pub text: String,
    /// Delete password for the thread.
    #[serde(default)]
    pub delete_password: String,
}

/// Body of PUT /api/threads/:board.
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    /// ID of the thread to report.
    #[serde(default)]
    pub thread_id: String,
}

/// Body of DELETE /api/threads/:board.
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    /// ID of the thread to delete.
    #[serde(default)]
    pub thread_id: String,
    /// Delete password to verify.
    #[serde(default)]
    pub delete_password: String,
}

/// Body of POST /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    /// ID of the thread to reply to.
    #[serde(default)]
    pub thread_id: String,
    /// Reply body.
    #[serde(default)]
    pub text: String,
    /// Delete password for the reply.
    #[serde(default)]
    pub delete_password: String,
}

/// Query of GET /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// ID of the thread to fetch.
    #[serde(default)]
    pub thread_id: String,
}

/// Body of PUT /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    /// ID of the thread containing the reply.
    #[serde(default)]
    pub thread_id: String,
    /// ID of the reply to report.
    #[serde(default)]
    pub reply_id: String,
}

/// Body of DELETE /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    /// ID of the thread containing the reply.
    #[serde(default)]
    pub thread_id: String,
    /// ID of the reply to soft-delete.
    #[serde(default)]
    pub reply_id: String,
    /// Delete password to verify.
    #[serde(default)]
    pub delete_password: String,
}
