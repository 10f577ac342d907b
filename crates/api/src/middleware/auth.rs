//! JWT-based authentication extractors for Axum handlers.
//!
//! Both extractors reload the member row from the database rather than
//! trusting the department/role baked into the token at login time. Access
//! decisions depend on the member's current department, so a transfer or
//! promotion must be visible on the next request, not at token expiry.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use moim_core::error::CoreError;
use moim_core::visibility::Viewer;
use moim_db::models::member::Member;
use moim_db::repositories::MemberRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated member extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthMember) -> AppResult<Json<()>> {
///     tracing::info!(member_id = auth.member.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthMember {
    /// The full member row loaded for this request.
    pub member: Member,
}

impl AuthMember {
    /// The identity facts access evaluation needs about this member.
    pub fn viewer(&self) -> Viewer {
        self.member.viewer()
    }
}

/// Optionally-authenticated viewer for endpoints that are readable without
/// a token (list views, the calendar).
///
/// A missing `Authorization` header yields `MaybeAuthMember(None)`; a header
/// that is present but invalid is still rejected with 401 so that a client
/// holding an expired token gets told, instead of silently seeing the
/// anonymous (empty) view.
#[derive(Debug, Clone)]
pub struct MaybeAuthMember(pub Option<Member>);

impl MaybeAuthMember {
    /// The viewer identity, if authenticated.
    pub fn viewer(&self) -> Option<Viewer> {
        self.0.as_ref().map(Member::viewer)
    }
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let member = member_from_bearer(auth_header, state).await?;
        Ok(AuthMember { member })
    }
}

impl FromRequestParts<AppState> for MaybeAuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(MaybeAuthMember(None));
        };

        let member = member_from_bearer(auth_header, state).await?;
        Ok(MaybeAuthMember(Some(member)))
    }
}

/// Validate a `Bearer <token>` header value and load the member it names.
async fn member_from_bearer(auth_header: &str, state: &AppState) -> Result<Member, AppError> {
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    let member = MemberRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Account no longer exists".into())))?;

    if !member.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    Ok(member)
}
