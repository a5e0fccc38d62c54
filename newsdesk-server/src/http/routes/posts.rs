//! Post endpoints
//!
//! Five operations over the post store: list, fetch by number, create,
//! partial update, delete. Path ids arrive as raw strings; anything
//! that doesn't parse as an integer takes the same not-found path as a
//! well-formed id with no matching post.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Post, PostDraft, PostPatch, ValidationError};

/// Create post request. `img` names the banner image; the field names
/// are the public wire contract.
#[derive(Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Partial update request. All fields optional; empty strings leave the
/// stored value unchanged, and unknown fields are ignored.
#[derive(Deserialize, Default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub img_caption: Option<String>,
    pub content: Option<String>,
}

/// Parse a path id, folding parse failures into the not-found path.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound { id: raw.to_owned() })
}

/// GET /posts - list all posts
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.store.list().await?;
    Ok(Json(posts))
}

/// GET /posts/{id} - fetch a post by sequential number
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&id)?;
    let post = state.store.get(id).await?;
    Ok(Json(post))
}

/// POST /posts - create a post
async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    if req.title.is_empty() {
        return Err(ValidationError::Empty { field: "title" }.into());
    }

    let draft = PostDraft {
        banner_image: req.img,
        title: req.title,
        content: req.content,
    };
    let post = state.store.create(draft).await?;
    tracing::info!(sequential_id = post.sequential_id, "post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PATCH /posts/{id} - update title, image caption, and/or content
async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&id)?;
    let patch = PostPatch {
        title: req.title,
        image_caption: req.img_caption,
        content: req.content,
    };
    let post = state.store.update(id, patch).await?;
    Ok(Json(post))
}

/// DELETE /posts/{id} - remove a post
///
/// The success body is plain text, the one non-JSON response in the API.
async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    tracing::info!(sequential_id = id, "post removed");
    Ok("post removed")
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert!(matches!(parse_id("7"), Ok(7)));
        assert!(matches!(parse_id("-3"), Ok(-3)));
    }

    #[test]
    fn parse_id_folds_garbage_into_not_found() {
        let err = parse_id("abc").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref id } if id == "abc"));

        let err = parse_id("1.5").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }
}
