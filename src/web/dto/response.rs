//! Response DTOs for the Web API.
//!
//! These are the only shapes serialized to JSON. `delete_password` and
//! `reported` have no fields here, so they can never leak into a response.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{FullThread, Reply, Thread, ThreadSummary};

/// A reply as exposed by the API.
#[derive(Debug, Serialize)]
pub struct ReplyView {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Reply body.
    pub text: String,
    /// Reply creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<Reply> for ReplyView {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}

/// A thread summary as returned by the board listing.
#[derive(Debug, Serialize)]
pub struct ThreadSummaryView {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Thread body.
    pub text: String,
    /// Thread creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency marker.
    pub bumped_on: DateTime<Utc>,
    /// Preview of the most recent replies, newest first.
    pub replies: Vec<ReplyView>,
    /// Total number of replies before truncation.
    pub replycount: i64,
}

impl From<ThreadSummary> for ThreadSummaryView {
    fn from(summary: ThreadSummary) -> Self {
        Self {
            id: summary.thread.id,
            text: summary.thread.text,
            created_on: summary.thread.created_on,
            bumped_on: summary.thread.bumped_on,
            replies: summary.replies.into_iter().map(ReplyView::from).collect(),
            replycount: summary.replycount,
        }
    }
}

/// A full thread with all of its replies, as returned by the reply view.
#[derive(Debug, Serialize)]
pub struct ThreadView {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Board this thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Thread creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Recency marker.
    pub bumped_on: DateTime<Utc>,
    /// All replies in insertion order.
    pub replies: Vec<ReplyView>,
}

impl From<FullThread> for ThreadView {
    fn from(full: FullThread) -> Self {
        let Thread {
            id,
            board,
            text,
            created_on,
            bumped_on,
            ..
        } = full.thread;
        Self {
            id,
            board,
            text,
            created_on,
            bumped_on,
            replies: full.replies.into_iter().map(ReplyView::from).collect(),
        }
    }
}
