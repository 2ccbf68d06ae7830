//! # Post Routes
//!
//! One handler per endpoint, each performing exactly one store operation.
//! Requests are independent and stateless; the only shared state is the
//! store handle opened at process start.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::store::{BlogPost, NewPost, PostId, PostPatch, PostStore};

use super::errors::{ApiError, ApiResult};

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

/// Routes for the blog post collection
pub fn post_routes(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .with_state(state)
}

/// Liveness route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Ids are opaque; anything that could never have been assigned matches no
/// document and reads as absent rather than malformed.
fn parse_id(raw: &str) -> ApiResult<PostId> {
    raw.parse::<Uuid>().map_err(|_| ApiError::NotFound)
}

/// Decode a JSON body into `T`, reporting shape problems as 400 rather
/// than letting the extractor reject with its own status.
fn decode_body<T: serde::de::DeserializeOwned>(body: Value) -> ApiResult<T> {
    serde_json::from_value(body).map_err(|e| ApiError::BadRequest(format!("invalid body: {e}")))
}

async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogPost>>> {
    Ok(Json(state.store.find_all()?))
}

async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogPost>> {
    let id = parse_id(&id)?;
    let post = state.store.find_by_id(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(post))
}

async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<BlogPost>)> {
    let input: NewPost = decode_body(body)?;
    let created = state.store.insert_one(input)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT body: the document id (must match the path) plus the fields to change.
#[derive(Debug, Deserialize)]
struct UpdatePostBody {
    id: String,
    #[serde(flatten)]
    patch: PostPatch,
}

async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let body: UpdatePostBody = decode_body(body)?;
    let body_id = body
        .id
        .parse::<Uuid>()
        .map_err(|_| ApiError::BadRequest("body id is not a valid post id".to_string()))?;
    if body_id != id {
        return Err(ApiError::BadRequest(
            "body id does not match path id".to_string(),
        ));
    }
    state.store.update_by_id(id, body.patch)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.store.delete_by_id(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_routes_build() {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
        };
        let _router = post_routes(state).merge(health_routes());
    }

    #[test]
    fn test_unparseable_id_reads_as_absent() {
        assert!(matches!(parse_id("not-a-uuid"), Err(ApiError::NotFound)));
        assert!(parse_id(&Uuid::new_v4().to_string()).is_ok());
    }

    #[test]
    fn test_update_body_accepts_partial_patch() {
        let body: UpdatePostBody = decode_body(serde_json::json!({
            "id": Uuid::new_v4().to_string(),
            "title": "only the title",
        }))
        .unwrap();
        assert_eq!(body.patch.title.as_deref(), Some("only the title"));
        assert!(body.patch.content.is_none());
    }

    #[test]
    fn test_update_body_requires_id() {
        let result: ApiResult<UpdatePostBody> =
            decode_body(serde_json::json!({"title": "no id"}));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
