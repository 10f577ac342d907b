//! Handlers for the `/posts` resource.
//!
//! Publishing a post triggers notification fan-out: records are persisted
//! before the response returns, email delivery continues in the background.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moim_core::content::ContentKind;
use moim_core::error::CoreError;
use moim_core::types::DbId;
use moim_core::visibility::can_read;
use moim_db::models::post::{CreatePost, Post};
use moim_db::repositories::PostRepo;
use moim_notify::Publication;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthMember, MaybeAuthMember};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/posts
///
/// Create a post and fan out notifications to mentioned members and, for
/// department-restricted posts, the allowed departments.
pub async fn create_post(
    auth: AuthMember,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }

    let post = PostRepo::create(&state.pool, auth.member.id, input).await?;

    let publication = Publication {
        kind: ContentKind::Post,
        content_id: post.id,
        title: post.title.clone(),
        author_id: auth.member.id,
        author_name: auth.member.name.clone(),
        permission: post.permission().cloned(),
    };
    state
        .dispatcher
        .dispatch_publication(&publication, &post.content)
        .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/posts
///
/// List the posts the viewer may read. Anonymous viewers get an empty list;
/// restricted posts are omitted rather than erroring.
pub async fn list_posts(
    viewer: MaybeAuthMember,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let viewer = viewer.viewer();
    let posts = PostRepo::list(&state.pool).await?;

    let data = posts
        .into_iter()
        .filter(|post| can_read(viewer.as_ref(), post.author_id, post.permission()))
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/posts/{id}
///
/// Fetch one post. 404 when absent, 403 when present but not readable by
/// the viewer.
pub async fn get_post(
    viewer: MaybeAuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Post>>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let viewer = viewer.viewer();
    if !can_read(viewer.as_ref(), post.author_id, post.permission()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have permission to view this post".into(),
        )));
    }

    Ok(Json(DataResponse { data: post }))
}
