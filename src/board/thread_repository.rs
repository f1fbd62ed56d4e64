//! Thread repository for anonboard.
//!
//! This module provides CRUD operations for threads in the database.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::thread::{NewThread, Thread};
use crate::{AnonboardError, Result};

/// Repository for thread CRUD operations.
pub struct ThreadRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new ThreadRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new thread in the database.
    ///
    /// Assigns the thread's ID and sets `created_on` and `bumped_on` to the
    /// same instant. Returns the created thread.
    pub async fn create(&self, new_thread: &NewThread) -> Result<Thread> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO threads (id, board, text, created_on, bumped_on, reported, delete_password)
             VALUES (?, ?, ?, ?, ?, 0, ?)",
        )
        .bind(&id)
        .bind(&new_thread.board)
        .bind(&new_thread.text)
        .bind(now)
        .bind(now)
        .bind(&new_thread.delete_password)
        .execute(self.pool)
        .await?;

        self.get_by_id(&id)
            .await?
            .ok_or(AnonboardError::ThreadNotFound)
    }

    /// Get a thread by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Thread>> {
        let result = sqlx::query_as::<_, Thread>(
            "SELECT id, board, text, created_on, bumped_on, reported, delete_password
             FROM threads WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List the most recently bumped threads on a board.
    ///
    /// Ordered by `bumped_on` descending; rowid breaks timestamp ties so
    /// the order is deterministic.
    pub async fn list_recent(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let threads = sqlx::query_as::<_, Thread>(
            "SELECT id, board, text, created_on, bumped_on, reported, delete_password
             FROM threads WHERE board = ?
             ORDER BY bumped_on DESC, rowid DESC LIMIT ?",
        )
        .bind(board)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(threads)
    }

    /// Set a thread's `reported` flag to true.
    ///
    /// Returns the number of rows affected (0 when the thread is missing).
    pub async fn mark_reported(&self, id: &str) -> Result<u64> {
        let affected = sqlx::query("UPDATE threads SET reported = 1 WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(affected)
    }

    /// Set a thread's `bumped_on` timestamp.
    pub async fn set_bumped_on(&self, id: &str, bumped_on: DateTime<Utc>) -> Result<u64> {
        let affected = sqlx::query("UPDATE threads SET bumped_on = ? WHERE id = ?")
            .bind(bumped_on)
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(affected)
    }

    /// Delete a thread by ID.
    ///
    /// Returns true if a thread was deleted, false if not found.
    /// Note: This will cascade delete all replies in the thread.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let affected = sqlx::query("DELETE FROM threads WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_db().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = repo
            .create(&NewThread::new("general", "Hello", "pw"))
            .await
            .unwrap();
        assert_eq!(thread.board, "general");
        assert_eq!(thread.text, "Hello");
        assert_eq!(thread.created_on, thread.bumped_on);
        assert!(!thread.reported);

        let fetched = repo.get_by_id(&thread.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, thread.id);
        assert_eq!(fetched.delete_password, "pw");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let db = test_db().await;
        let repo = ThreadRepository::new(db.pool());
        assert!(repo.get_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_recent_scoped_to_board() {
        let db = test_db().await;
        let repo = ThreadRepository::new(db.pool());

        repo.create(&NewThread::new("a", "one", "pw")).await.unwrap();
        repo.create(&NewThread::new("b", "two", "pw")).await.unwrap();
        repo.create(&NewThread::new("a", "three", "pw")).await.unwrap();

        let threads = repo.list_recent("a", 10).await.unwrap();
        assert_eq!(threads.len(), 2);
        assert!(threads.iter().all(|t| t.board == "a"));
        // Newest first
        assert_eq!(threads[0].text, "three");
    }

    #[tokio::test]
    async fn test_list_recent_limit() {
        let db = test_db().await;
        let repo = ThreadRepository::new(db.pool());

        for i in 0..12 {
            repo.create(&NewThread::new("general", format!("t{i}"), "pw"))
                .await
                .unwrap();
        }

        let threads = repo.list_recent("general", 10).await.unwrap();
        assert_eq!(threads.len(), 10);
    }

    #[tokio::test]
    async fn test_mark_reported() {
        let db = test_db().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = repo
            .create(&NewThread::new("general", "Hello", "pw"))
            .await
            .unwrap();

        assert_eq!(repo.mark_reported(&thread.id).await.unwrap(), 1);
        assert!(repo.get_by_id(&thread.id).await.unwrap().unwrap().reported);

        // Missing thread is not an error
        assert_eq!(repo.mark_reported("nope").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = repo
            .create(&NewThread::new("general", "Hello", "pw"))
            .await
            .unwrap();

        assert!(repo.delete(&thread.id).await.unwrap());
        assert!(repo.get_by_id(&thread.id).await.unwrap().is_none());
        assert!(!repo.delete(&thread.id).await.unwrap());
    }
}
