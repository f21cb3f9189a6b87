//! Authentication routes for register, login, logout, and session checks.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{error, info};

use crate::middleware::{AuthSession, SESSION_COOKIE};
use crate::response::{error_response, household_error};
use crate::AppState;
use hearth_core::auth::{hash_password, verify_password};
use hearth_db::HouseholdRepository;
use hearth_shared::AppError;
use hearth_shared::auth::{AuthResponse, CheckAuthResponse, LoginRequest, RegisterRequest};

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/check-auth", get(check_auth))
}

/// Creates the auth routes that sit behind the session middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/logout", post(logout))
}

/// Builds the session cookie carrying an issued token.
fn session_cookie(token: String, state: &AppState) -> Cookie<'static> {
    let max_age = i64::try_from(state.session_ttl.as_secs()).unwrap_or(86_400);
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(state.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age))
        .build()
}

/// Builds the removal cookie that clears the session on the client.
fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// POST /api/register - Create a household and start a session.
async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Response {
    let family_name = payload.family_name.as_deref().unwrap_or("").trim();
    let password = payload.password.as_deref().unwrap_or("");
    if family_name.is_empty() || password.is_empty() {
        return error_response(&AppError::Validation(
            "Family name and password are required".to_string(),
        ));
    }

    let password_hash = match hash_password(password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return error_response(&AppError::Internal(e.to_string()));
        }
    };

    let repo = HouseholdRepository::new((*state.db).clone());
    let household = match repo.create(family_name, &password_hash).await {
        Ok(h) => h,
        Err(e) => return error_response(&household_error(e)),
    };

    info!(household_id = %household.id, "New household registered");

    let token = state.sessions.create(household.id, &household.family_name);
    let jar = jar.add(session_cookie(token, &state));

    (
        jar,
        Json(AuthResponse {
            success: true,
            message: "Account created successfully".to_string(),
            family_name: household.family_name,
        }),
    )
        .into_response()
}

/// POST /api/login - Authenticate a household and start a session.
///
/// Unknown family name and wrong password produce the identical response,
/// so an attacker cannot enumerate registered households.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Response {
    let family_name = payload.family_name.as_deref().unwrap_or("").trim();
    let password = payload.password.as_deref().unwrap_or("");
    if family_name.is_empty() || password.is_empty() {
        return error_response(&AppError::Validation(
            "Family name and password are required".to_string(),
        ));
    }

    let repo = HouseholdRepository::new((*state.db).clone());
    let household = match repo.find_by_name(family_name).await {
        Ok(Some(h)) => h,
        Ok(None) => {
            info!("Login attempt for unknown family name");
            return error_response(&AppError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    match verify_password(password, &household.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(household_id = %household.id, "Failed login attempt");
            return error_response(&AppError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return error_response(&AppError::Internal(e.to_string()));
        }
    }

    info!(household_id = %household.id, "Household logged in");

    let token = state.sessions.create(household.id, &household.family_name);
    let jar = jar.add(session_cookie(token, &state));

    (
        jar,
        Json(AuthResponse {
            success: true,
            message: "Login successful".to_string(),
            family_name: household.family_name,
        }),
    )
        .into_response()
}

/// POST /api/logout - Destroy the session and clear the cookie.
///
/// Destroying an already-gone session still succeeds.
async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    _session: AuthSession,
) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value());
    }

    let jar = jar.remove(removal_cookie());

    (
        jar,
        Json(serde_json::json!({
            "success": true,
            "message": "Logged out successfully"
        })),
    )
        .into_response()
}

/// GET /api/check-auth - Report whether the request carries a live session.
///
/// Never fails; an absent or expired session is an `authenticated: false`
/// body, not an error.
async fn check_auth(State(state): State<AppState>, jar: CookieJar) -> Json<CheckAuthResponse> {
    let session = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.validate(cookie.value()));

    match session {
        Some(session) => Json(CheckAuthResponse {
            authenticated: true,
            family_name: Some(session.family_name),
        }),
        None => Json(CheckAuthResponse {
            authenticated: false,
            family_name: None,
        }),
    }
}
