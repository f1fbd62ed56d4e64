//! Reply handlers for the Web API.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use std::sync::Arc;

use crate::board::NewReply;
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest, ThreadQuery, ThreadView,
};
use crate::web::handlers::{error_token, AppState};

/// POST /api/replies/:board - Append a reply to a thread, then send the
/// caller back to the thread view.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<CreateReplyRequest>,
) -> Response {
    let thread_id = req.thread_id.clone();
    let new_reply = NewReply::new(req.thread_id, req.text, req.delete_password);

    match state.replies.create_reply(new_reply).await {
        Ok(reply) => {
            tracing::debug!(thread_id = %thread_id, reply_id = %reply.id, "Created reply");
            Redirect::to(&format!("/b/{board}/{thread_id}")).into_response()
        }
        Err(e) => error_token(e),
    }
}

/// GET /api/replies/:board - Fetch a full thread with all replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThreadQuery>,
) -> Response {
    match state.replies.full_thread(&query.thread_id).await {
        Ok(full) => Json(ThreadView::from(full)).into_response(),
        Err(e) => error_token(e),
    }
}

/// PUT /api/replies/:board - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Form(req): Form<ReportReplyRequest>,
) -> Response {
    match state
        .replies
        .report_reply(&req.thread_id, &req.reply_id)
        .await
    {
        Ok(()) => "reported".into_response(),
        Err(e) => error_token(e),
    }
}

/// DELETE /api/replies/:board - Soft-delete a reply, gated by its password.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Form(req): Form<DeleteReplyRequest>,
) -> Response {
    match state
        .replies
        .delete_reply(&req.thread_id, &req.reply_id, &req.delete_password)
        .await
    {
        Ok(()) => "success".into_response(),
        Err(e) => error_token(e),
    }
}
