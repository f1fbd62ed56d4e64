//! anonboard - Anonymous Message Board
//!
//! A minimal anonymous message-board backend: clients create discussion
//! threads on named boards, post replies to threads, and can report or
//! soft-delete content via a shared secret.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{
    BoardService, FullThread, NewReply, NewThread, Reply, ReplyService, Thread, ThreadSummary,
    DELETED_REPLY_TEXT, REPLY_PREVIEW_SIZE, THREAD_PAGE_SIZE,
};
pub use config::Config;
pub use db::Database;
pub use error::{AnonboardError, Result};
pub use web::WebServer;
