//! Authentication request and response payloads.

use serde::{Deserialize, Serialize};

/// Login request payload.
///
/// Fields are optional at the deserialization boundary; a missing key is a
/// domain 400, not an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Family name used as the login handle (case-sensitive).
    pub family_name: Option<String>,
    /// Shared household password.
    pub password: Option<String>,
}

/// Registration request payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Family name for the new household (must be unique).
    pub family_name: Option<String>,
    /// Shared household password.
    pub password: Option<String>,
}

/// Response for successful login or registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Always true on success.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// The authenticated family name.
    pub family_name: String,
}

/// Response for `GET /api/check-auth`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAuthResponse {
    /// Whether a valid session accompanied the request.
    pub authenticated: bool,
    /// Family name of the session, when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_camel_case() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"familyName":"Smith","password":"pw1234"}"#).unwrap();
        assert_eq!(req.family_name.as_deref(), Some("Smith"));
        assert_eq!(req.password.as_deref(), Some("pw1234"));
    }

    #[test]
    fn test_login_request_tolerates_missing_keys() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.family_name, None);
        assert_eq!(req.password, None);
    }

    #[test]
    fn test_check_auth_omits_absent_name() {
        let body = serde_json::to_string(&CheckAuthResponse {
            authenticated: false,
            family_name: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"authenticated":false}"#);
    }
}
