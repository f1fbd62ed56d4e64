//! Database schema and migrations for anonboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - threads and replies
    r#"
-- Threads table. One row per top-level post; the board is a partition
-- key, not a stored entity.
CREATE TABLE threads (
    id              TEXT PRIMARY KEY,
    board           TEXT NOT NULL,
    text            TEXT NOT NULL,
    created_on      TEXT NOT NULL,
    bumped_on       TEXT NOT NULL,
    reported        INTEGER NOT NULL DEFAULT 0,
    delete_password TEXT NOT NULL
);

CREATE INDEX idx_threads_board ON threads(board);
CREATE INDEX idx_threads_bumped_on ON threads(bumped_on);

-- Replies table. Rows are never deleted (soft-delete only redacts text),
-- so rowid ascending is the insertion order of a thread's replies.
CREATE TABLE replies (
    id              TEXT PRIMARY KEY,
    thread_id       TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
    text            TEXT NOT NULL,
    created_on      TEXT NOT NULL,
    reported        INTEGER NOT NULL DEFAULT 0,
    delete_password TEXT NOT NULL
);

CREATE INDEX idx_replies_thread_id ON replies(thread_id);
"#,
];
