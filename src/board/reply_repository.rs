//! Reply repository for anonboard.
//!
//! This module provides CRUD operations for replies in the database.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::reply::{NewReply, Reply, DELETED_REPLY_TEXT};
use crate::{AnonboardError, Result};

/// Repository for reply CRUD operations.
pub struct ReplyRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReplyRepository<'a> {
    /// Create a new ReplyRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new reply and bump its parent thread.
    ///
    /// The reply's `created_on` and the thread's `bumped_on` are set to the
    /// same instant, inside one transaction, so the bump invariant holds
    /// even when replies to the same thread race.
    pub async fn create(&self, new_reply: &NewReply) -> Result<Reply> {
        let id = Uuid::new_v4().to_string();
        let now = chrono::Utc::now();

        let mut tx = self.pool.begin().await?;

        // Bump the parent first; zero affected rows means the thread is gone.
        let affected = sqlx::query("UPDATE threads SET bumped_on = ? WHERE id = ?")
            .bind(now)
            .bind(&new_reply.thread_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(AnonboardError::ThreadNotFound);
        }

        sqlx::query(
            "INSERT INTO replies (id, thread_id, text, created_on, reported, delete_password)
             VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(&id)
        .bind(&new_reply.thread_id)
        .bind(&new_reply.text)
        .bind(now)
        .bind(&new_reply.delete_password)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_by_id(&new_reply.thread_id, &id)
            .await?
            .ok_or(AnonboardError::ReplyNotFound)
    }

    /// Get a reply by ID within a thread.
    pub async fn get_by_id(&self, thread_id: &str, reply_id: &str) -> Result<Option<Reply>> {
        let result = sqlx::query_as::<_, Reply>(
            "SELECT id, thread_id, text, created_on, reported, delete_password
             FROM replies WHERE thread_id = ? AND id = ?",
        )
        .bind(thread_id)
        .bind(reply_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List all replies of a thread in insertion order.
    ///
    /// Replies are never deleted, so rowid ascending is insertion order.
    pub async fn list_for_thread(&self, thread_id: &str) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            "SELECT id, thread_id, text, created_on, reported, delete_password
             FROM replies WHERE thread_id = ? ORDER BY rowid ASC",
        )
        .bind(thread_id)
        .fetch_all(self.pool)
        .await?;

        Ok(replies)
    }

    /// List the most recent replies of a thread, newest first.
    pub async fn latest_for_thread(&self, thread_id: &str, limit: i64) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            "SELECT id, thread_id, text, created_on, reported, delete_password
             FROM replies WHERE thread_id = ?
             ORDER BY created_on DESC, rowid DESC LIMIT ?",
        )
        .bind(thread_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(replies)
    }

    /// Count all replies of a thread.
    pub async fn count_for_thread(&self, thread_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE thread_id = ?")
            .bind(thread_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Set a reply's `reported` flag to true.
    ///
    /// Returns the number of rows affected (0 when the reply is missing).
    pub async fn mark_reported(&self, thread_id: &str, reply_id: &str) -> Result<u64> {
        let affected = sqlx::query("UPDATE replies SET reported = 1 WHERE thread_id = ? AND id = ?")
            .bind(thread_id)
            .bind(reply_id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(affected)
    }

    /// Soft-delete a reply by overwriting its text with the deletion marker.
    ///
    /// Identity, timestamps and the reported flag are left untouched.
    /// Returns the number of rows affected (0 when the reply is missing).
    pub async fn redact(&self, thread_id: &str, reply_id: &str) -> Result<u64> {
        let affected = sqlx::query("UPDATE replies SET text = ? WHERE thread_id = ? AND id = ?")
            .bind(DELETED_REPLY_TEXT)
            .bind(thread_id)
            .bind(reply_id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(affected)
    }
}
