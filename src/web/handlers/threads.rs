//! Thread handlers for the Web API.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use std::sync::Arc;

use crate::board::NewThread;
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ThreadSummaryView,
};
use crate::web::handlers::{error_token, AppState};

/// POST /api/threads/:board - Create a thread, then send the caller back
/// to the board view.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<CreateThreadRequest>,
) -> Response {
    let new_thread = NewThread::new(&board, req.text, req.delete_password);

    match state.boards.create_thread(new_thread).await {
        Ok(thread) => {
            tracing::debug!(board = %board, thread_id = %thread.id, "Created thread");
            Redirect::to(&format!("/b/{board}/")).into_response()
        }
        Err(e) => error_token(e),
    }
}

/// GET /api/threads/:board - List the most recent threads with reply
/// previews.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Response {
    match state.boards.list_recent(&board).await {
        Ok(summaries) => {
            let views: Vec<ThreadSummaryView> =
                summaries.into_iter().map(ThreadSummaryView::from).collect();
            Json(views).into_response()
        }
        Err(e) => error_token(e),
    }
}

/// PUT /api/threads/:board - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Form(req): Form<ReportThreadRequest>,
) -> Response {
    match state.boards.report_thread(&req.thread_id).await {
        Ok(()) => "reported".into_response(),
        Err(e) => error_token(e),
    }
}

/// DELETE /api/threads/:board - Delete a thread, gated by its password.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Form(req): Form<DeleteThreadRequest>,
) -> Response {
    match state
        .boards
        .delete_thread(&req.thread_id, &req.delete_password)
        .await
    {
        Ok(()) => "success".into_response(),
        Err(e) => error_token(e),
    }
}
