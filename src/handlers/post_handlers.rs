// src/handlers/post_handlers.rs - single post page and its form actions

use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use log::{error, info, warn};
use urlencoding::encode;

use crate::dtos::form_dtos::PostActionForm;
use crate::dtos::post_dtos::CreateCommentDTO;
use crate::handlers::{redirect, text_response};
use crate::models::post::Post;
use crate::views::pages::{NotFoundTemplate, PostDetailTemplate};
use crate::views::{render_html, render_html_with_status, Chrome};
use crate::AppState;

/// GET /post/{id}
/// Any failure to fetch, including an unreachable API, shows the not-found page.
#[get("/post/{id}")]
pub async fn show_post(app_state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    let chrome = Chrome::new(&app_state.owner);

    match app_state.api.get_post(&id).await.map(Post::from_api) {
        Ok(Some(post)) => render_html(&PostDetailTemplate { chrome, post: &post }),
        Ok(None) => {
            warn!("Post {} has no id or title, showing not found", id);
            render_html_with_status(StatusCode::NOT_FOUND, &NotFoundTemplate { chrome })
        }
        Err(e) => {
            warn!("Failed to fetch post {}: {}", id, e);
            render_html_with_status(StatusCode::NOT_FOUND, &NotFoundTemplate { chrome })
        }
    }
}

/// POST /post/{id} with `action` = delete | comment | like
#[post("/post/{id}")]
pub async fn post_action(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    form: Result<web::Form<PostActionForm>, actix_web::Error>,
) -> HttpResponse {
    let id = path.into_inner();
    let PostActionForm { action, author, content } = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            warn!("Unreadable action form for post {}: {}", id, e);
            return text_response(StatusCode::BAD_REQUEST, "Undefined action");
        }
    };

    match action.as_deref() {
        Some("delete") => delete_post(&app_state, &id).await,
        Some("comment") => add_comment(&app_state, &id, author, content).await,
        Some("like") => like_post(&app_state, &id).await,
        other => {
            warn!("Undefined action {:?} for post {}", other, id);
            text_response(StatusCode::BAD_REQUEST, "Undefined action")
        }
    }
}

fn detail_path(id: &str) -> String {
    format!("/post/{}", encode(id))
}

async fn delete_post(app_state: &AppState, id: &str) -> HttpResponse {
    match app_state.api.delete_post(id).await {
        Ok(()) => {
            info!("Deleted post {}", id);
            redirect(StatusCode::SEE_OTHER, "/")
        }
        Err(e) => {
            error!("Error deleting post {}: {}", id, e);
            text_response(StatusCode::INTERNAL_SERVER_ERROR, "Error deleting post")
        }
    }
}

async fn add_comment(
    app_state: &AppState,
    id: &str,
    author: Option<String>,
    content: Option<String>,
) -> HttpResponse {
    let author = author.unwrap_or_default().trim().to_string();
    let content = content.unwrap_or_default().trim().to_string();

    if author.is_empty() || content.is_empty() {
        return text_response(StatusCode::BAD_REQUEST, "Required fields missing");
    }

    let comment = CreateCommentDTO { author, content };
    match app_state.api.add_comment(id, &comment).await {
        Ok(()) => {
            info!("Added comment by {} to post {}", comment.author, id);
            redirect(StatusCode::SEE_OTHER, &detail_path(id))
        }
        Err(e) => {
            error!("Error posting comment on post {}: {}", id, e);
            text_response(StatusCode::INTERNAL_SERVER_ERROR, "Error posting comment")
        }
    }
}

async fn like_post(app_state: &AppState, id: &str) -> HttpResponse {
    match app_state.api.like_post(id).await {
        Ok(()) => redirect(StatusCode::SEE_OTHER, &detail_path(id)),
        Err(e) => {
            error!("Error liking post {}: {}", id, e);
            text_response(StatusCode::INTERNAL_SERVER_ERROR, "Error liking post")
        }
    }
}
