//! Reply model for anonboard.

use chrono::{DateTime, Utc};

/// Marker text written over a reply's body on soft-delete.
pub const DELETED_REPLY_TEXT: &str = "[deleted]";

/// Reply entity embedded in a thread's reply sequence.
///
/// Replies are never physically removed; a soft-delete overwrites `text`
/// with [`DELETED_REPLY_TEXT`] while identity and timestamps stay intact.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Reply {
    /// Opaque unique reply ID, assigned at creation.
    pub id: String,
    /// ID of the thread this reply belongs to.
    pub thread_id: String,
    /// Reply body.
    pub text: String,
    /// Reply creation timestamp. Immutable after creation.
    pub created_on: DateTime<Utc>,
    /// Whether the reply has been reported. Never reset.
    pub reported: bool,
    /// Plaintext delete password, compared exactly on delete requests.
    pub delete_password: String,
}

impl Reply {
    /// Check if this reply has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.text == DELETED_REPLY_TEXT
    }
}

/// Data for creating a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// ID of the thread to reply to.
    pub thread_id: String,
    /// Reply body.
    pub text: String,
    /// Delete password for the reply.
    pub delete_password: String,
}

impl NewReply {
    /// Create a new reply with required fields.
    pub fn new(
        thread_id: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
