//! Thread model for anonboard.

use chrono::{DateTime, Utc};

/// Thread entity representing a top-level post on a board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Thread {
    /// Opaque unique thread ID, assigned at creation.
    pub id: String,
    /// Name of the board this thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Thread creation timestamp. Immutable after creation.
    pub created_on: DateTime<Utc>,
    /// Recency marker. Equals `created_on` until a reply is added, then
    /// always equals the newest reply's `created_on`.
    pub bumped_on: DateTime<Utc>,
    /// Whether the thread has been reported. Never reset.
    pub reported: bool,
    /// Plaintext delete password, compared exactly on delete requests.
    pub delete_password: String,
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Name of the board to create the thread on.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Delete password for the thread.
    pub delete_password: String,
}

impl NewThread {
    /// Create a new thread with required fields.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
