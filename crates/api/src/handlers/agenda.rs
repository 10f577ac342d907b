//! Handlers for the `/agendas` resource.
//!
//! Same visibility and fan-out shape as posts, with notification kind
//! `agenda` for department broadcasts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moim_core::content::ContentKind;
use moim_core::error::CoreError;
use moim_core::types::DbId;
use moim_core::visibility::can_read;
use moim_db::models::agenda::{Agenda, CreateAgenda};
use moim_db::repositories::AgendaRepo;
use moim_notify::Publication;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthMember, MaybeAuthMember};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/agendas
pub async fn create_agenda(
    auth: AuthMember,
    State(state): State<AppState>,
    Json(input): Json<CreateAgenda>,
) -> AppResult<(StatusCode, Json<DataResponse<Agenda>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }

    let agenda = AgendaRepo::create(&state.pool, auth.member.id, &input).await?;

    let publication = Publication {
        kind: ContentKind::Agenda,
        content_id: agenda.id,
        title: agenda.title.clone(),
        author_id: auth.member.id,
        author_name: auth.member.name.clone(),
        permission: agenda.permission().cloned(),
    };
    state
        .dispatcher
        .dispatch_publication(&publication, &agenda.content)
        .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: agenda })))
}

/// GET /api/v1/agendas
pub async fn list_agendas(
    viewer: MaybeAuthMember,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Agenda>>>> {
    let viewer = viewer.viewer();
    let agendas = AgendaRepo::list(&state.pool).await?;

    let data = agendas
        .into_iter()
        .filter(|agenda| can_read(viewer.as_ref(), agenda.author_id, agenda.permission()))
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/agendas/{id}
pub async fn get_agenda(
    viewer: MaybeAuthMember,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Agenda>>> {
    let agenda = AgendaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Agenda",
            id,
        }))?;

    let viewer = viewer.viewer();
    if !can_read(viewer.as_ref(), agenda.author_id, agenda.permission()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have permission to view this agenda".into(),
        )));
    }

    Ok(Json(DataResponse { data: agenda }))
}
