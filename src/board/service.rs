//! Board and reply services for anonboard.
//!
//! `BoardService` implements the four operations over threads (create,
//! list recent, report, delete) and `ReplyService` the four over replies
//! (create, full thread, report, soft-delete). Both sit directly on the
//! storage layer; there is no caching or coordination in between, and
//! each operation is one short read/write chain against the database.

use crate::db::Database;
use crate::{AnonboardError, Result};

use super::reply::{NewReply, Reply};
use super::reply_repository::ReplyRepository;
use super::thread::{NewThread, Thread};
use super::thread_repository::ThreadRepository;

/// Maximum number of threads returned by a board listing.
pub const THREAD_PAGE_SIZE: i64 = 10;

/// Number of preview replies returned per thread in a board listing.
pub const REPLY_PREVIEW_SIZE: i64 = 3;

/// Validate that a required field is present and non-empty.
fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AnonboardError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// A thread summary as returned by a board listing: the thread, a preview
/// of its most recent replies and the total reply count.
#[derive(Debug, Clone)]
pub struct ThreadSummary {
    /// The thread itself.
    pub thread: Thread,
    /// The most recent replies, newest first, at most [`REPLY_PREVIEW_SIZE`].
    pub replies: Vec<Reply>,
    /// Total number of replies before truncation.
    pub replycount: i64,
}

/// A thread together with all of its replies in insertion order.
#[derive(Debug, Clone)]
pub struct FullThread {
    /// The thread itself.
    pub thread: Thread,
    /// All replies, oldest first.
    pub replies: Vec<Reply>,
}

/// High-level operations over threads on a board.
#[derive(Clone)]
pub struct BoardService {
    db: Database,
}

impl BoardService {
    /// Create a new board service with the given database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a new thread on a board.
    pub async fn create_thread(&self, new_thread: NewThread) -> Result<Thread> {
        validate_required("text", &new_thread.text)?;
        validate_required("delete_password", &new_thread.delete_password)?;

        ThreadRepository::new(self.db.pool()).create(&new_thread).await
    }

    /// List the most recently bumped threads on a board.
    ///
    /// Returns at most [`THREAD_PAGE_SIZE`] threads, each with its total
    /// reply count and a preview of the [`REPLY_PREVIEW_SIZE`] most recent
    /// replies. The full reply sequences remain in storage untouched.
    pub async fn list_recent(&self, board: &str) -> Result<Vec<ThreadSummary>> {
        let thread_repo = ThreadRepository::new(self.db.pool());
        let reply_repo = ReplyRepository::new(self.db.pool());

        let threads = thread_repo.list_recent(board, THREAD_PAGE_SIZE).await?;

        let mut summaries = Vec::with_capacity(threads.len());
        for thread in threads {
            let replycount = reply_repo.count_for_thread(&thread.id).await?;
            let replies = reply_repo
                .latest_for_thread(&thread.id, REPLY_PREVIEW_SIZE)
                .await?;
            summaries.push(ThreadSummary {
                thread,
                replies,
                replycount,
            });
        }

        Ok(summaries)
    }

    /// Flag a thread as reported.
    ///
    /// Reporting is not owner-gated and a missing thread is a silent no-op,
    /// so repeated reports of the same id always succeed.
    pub async fn report_thread(&self, thread_id: &str) -> Result<()> {
        ThreadRepository::new(self.db.pool())
            .mark_reported(thread_id)
            .await?;
        Ok(())
    }

    /// Delete a thread after verifying its delete password.
    ///
    /// The thread is physically removed along with all of its replies.
    pub async fn delete_thread(&self, thread_id: &str, delete_password: &str) -> Result<()> {
        let repo = ThreadRepository::new(self.db.pool());

        let thread = repo
            .get_by_id(thread_id)
            .await?
            .ok_or(AnonboardError::ThreadNotFound)?;

        if thread.delete_password != delete_password {
            return Err(AnonboardError::IncorrectPassword);
        }

        repo.delete(thread_id).await?;
        Ok(())
    }
}

/// High-level operations over the replies of a thread.
#[derive(Clone)]
pub struct ReplyService {
    db: Database,
}

impl ReplyService {
    /// Create a new reply service with the given database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Append a reply to a thread.
    ///
    /// The parent thread's `bumped_on` is set to exactly the new reply's
    /// `created_on`.
    pub async fn create_reply(&self, new_reply: NewReply) -> Result<Reply> {
        validate_required("text", &new_reply.text)?;
        validate_required("delete_password", &new_reply.delete_password)?;

        ReplyRepository::new(self.db.pool()).create(&new_reply).await
    }

    /// Fetch a thread with all of its replies in insertion order.
    pub async fn full_thread(&self, thread_id: &str) -> Result<FullThread> {
        let thread = ThreadRepository::new(self.db.pool())
            .get_by_id(thread_id)
            .await?
            .ok_or(AnonboardError::ThreadNotFound)?;

        let replies = ReplyRepository::new(self.db.pool())
            .list_for_thread(thread_id)
            .await?;

        Ok(FullThread { thread, replies })
    }

    /// Flag a reply as reported.
    pub async fn report_reply(&self, thread_id: &str, reply_id: &str) -> Result<()> {
        ThreadRepository::new(self.db.pool())
            .get_by_id(thread_id)
            .await?
            .ok_or(AnonboardError::ThreadNotFound)?;

        let affected = ReplyRepository::new(self.db.pool())
            .mark_reported(thread_id, reply_id)
            .await?;
        if affected == 0 {
            return Err(AnonboardError::ReplyNotFound);
        }

        Ok(())
    }

    /// Soft-delete a reply after verifying its delete password.
    ///
    /// The reply's text is replaced with the deletion marker; its identity,
    /// timestamps and position in the thread are preserved.
    pub async fn delete_reply(
        &self,
        thread_id: &str,
        reply_id: &str,
        delete_password: &str,
    ) -> Result<()> {
        ThreadRepository::new(self.db.pool())
            .get_by_id(thread_id)
            .await?
            .ok_or(AnonboardError::ThreadNotFound)?;

        let repo = ReplyRepository::new(self.db.pool());
        let reply = repo
            .get_by_id(thread_id, reply_id)
            .await?
            .ok_or(AnonboardError::ReplyNotFound)?;

        if reply.delete_password != delete_password {
            return Err(AnonboardError::IncorrectPassword);
        }

        repo.redact(thread_id, reply_id).await?;
        Ok(())
    }
}
