//! Session authentication middleware for protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::AppState;
use hearth_core::Session;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "hearth_session";

/// Authentication middleware that validates the session cookie.
///
/// This middleware:
/// 1. Extracts the opaque token from the session cookie
/// 2. Validates it against the session store
/// 3. Stores the household binding in request extensions for handlers
///
/// Every tenant-scoped operation hangs behind this layer; on a missing or
/// expired session the operation is never attempted.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return not_authenticated();
    };

    match state.sessions.validate(cookie.value()) {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => not_authenticated(),
    }
}

/// The 401 response shared by all protected endpoints.
fn not_authenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Not authenticated" })),
    )
        .into_response()
}

/// Extractor for the authenticated household session.
///
/// Use this in handlers to get the authenticated household:
///
/// ```ignore
/// async fn handler(session: AuthSession) -> impl IntoResponse {
///     let household_id = session.household_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession(pub Session);

impl AuthSession {
    /// Returns the authenticated household id. Never client-supplied: this
    /// value comes only from the validated session.
    #[must_use]
    pub const fn household_id(&self) -> uuid::Uuid {
        self.0.household_id
    }

    /// Returns the household's family name.
    #[must_use]
    pub fn family_name(&self) -> &str {
        &self.0.family_name
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(AuthSession)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Not authenticated" })),
                )
            })
    }
}
