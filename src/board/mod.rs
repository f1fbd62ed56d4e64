//! Board module for anonboard.
//!
//! This module provides the message board core:
//! - Thread management (create, list recent, report, delete)
//! - Reply management (create with bump, full view, report, soft-delete)
//! - Repositories for both entities on top of the database pool

mod reply;
mod reply_repository;
mod service;
mod thread;
mod thread_repository;

pub use reply::{NewReply, Reply, DELETED_REPLY_TEXT};
pub use reply_repository::ReplyRepository;
pub use service::{
    BoardService, FullThread, ReplyService, ThreadSummary, REPLY_PREVIEW_SIZE, THREAD_PAGE_SIZE,
};
pub use thread::{NewThread, Thread};
pub use thread_repository::ThreadRepository;
