//! Family member routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::AuthSession;
use crate::response::{error_response, member_error};
use crate::AppState;
use hearth_db::MemberRepository;
use hearth_db::entities::family_members;
use hearth_shared::AppError;

/// Creates the member routes (requires auth middleware to be applied
/// externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/family-members", get(list_members))
        .route("/family-members", post(create_member))
        .route("/family-members/bulk", post(create_members_bulk))
        .route("/family-members/{id}", put(rename_member))
        .route("/family-members/{id}", delete(delete_member))
}

/// Request body for creating or renaming a member.
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    /// Member name; trimmed, must be non-empty.
    pub name: Option<String>,
}

/// Request body for bulk member creation.
#[derive(Debug, Deserialize)]
pub struct BulkMembersRequest {
    /// Names to insert; blank entries are dropped silently.
    pub members: Option<Vec<String>>,
}

/// Response for a family member.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    /// Member id.
    pub id: Uuid,
    /// Member name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<family_members::Model> for MemberResponse {
    fn from(model: family_members::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at.into(),
        }
    }
}

/// GET /api/family-members - List the household's members, name ascending.
async fn list_members(State(state): State<AppState>, session: AuthSession) -> Response {
    let repo = MemberRepository::new((*state.db).clone());

    match repo.list(session.household_id()).await {
        Ok(members) => Json(
            members
                .into_iter()
                .map(MemberResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => error_response(&AppError::Database(e.to_string())),
    }
}

/// POST /api/family-members - Add a single member.
async fn create_member(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<MemberRequest>,
) -> Response {
    let name = payload.name.unwrap_or_default();
    let repo = MemberRepository::new((*state.db).clone());

    match repo.create(session.household_id(), &name).await {
        Ok(member) => Json(MemberResponse::from(member)).into_response(),
        Err(e) => error_response(&member_error(e)),
    }
}

/// POST /api/family-members/bulk - Add several members atomically.
///
/// Returns the household's full member list after the batch lands.
async fn create_members_bulk(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<BulkMembersRequest>,
) -> Response {
    let Some(names) = payload.members.filter(|m| !m.is_empty()) else {
        return error_response(&AppError::Validation(
            "Members array is required".to_string(),
        ));
    };

    let repo = MemberRepository::new((*state.db).clone());

    match repo.create_bulk(session.household_id(), &names).await {
        Ok(members) => Json(
            members
                .into_iter()
                .map(MemberResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => error_response(&member_error(e)),
    }
}

/// PUT /api/family-members/{id} - Rename a member.
async fn rename_member(
    State(state): State<AppState>,
    session: AuthSession,
    Path(member_id): Path<Uuid>,
    Json(payload): Json<MemberRequest>,
) -> Response {
    let name = payload.name.unwrap_or_default();
    let repo = MemberRepository::new((*state.db).clone());

    match repo
        .rename(session.household_id(), member_id, &name)
        .await
    {
        Ok(member) => Json(MemberResponse::from(member)).into_response(),
        Err(e) => error_response(&member_error(e)),
    }
}

/// DELETE /api/family-members/{id} - Remove a member.
///
/// Loans referencing the member's name are untouched.
async fn delete_member(
    State(state): State<AppState>,
    session: AuthSession,
    Path(member_id): Path<Uuid>,
) -> Response {
    let repo = MemberRepository::new((*state.db).clone());

    match repo.delete(session.household_id(), member_id).await {
        Ok(()) => Json(serde_json::json!({
            "success": true,
            "message": "Family member deleted successfully"
        }))
        .into_response(),
        Err(e) => error_response(&member_error(e)),
    }
}
