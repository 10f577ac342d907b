//! Handlers for the `/members` resource.

use axum::extract::State;
use axum::Json;
use moim_db::models::member::MemberResponse;
use moim_db::repositories::MemberRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthMember;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/members
///
/// List the active member roster. Requires authentication; the roster is
/// what the mention picker in the authoring UI is populated from.
pub async fn list_members(
    _auth: AuthMember,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MemberResponse>>>> {
    let members = MemberRepo::list_active(&state.pool).await?;
    let data = members.into_iter().map(MemberResponse::from).collect();
    Ok(Json(DataResponse { data }))
}
