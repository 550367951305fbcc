//! User and authentication models

use serde::{Deserialize, Serialize};

/// Marketplace role attached to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Organizer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "CUSTOMER"),
            Role::Organizer => write!(f, "ORGANIZER"),
        }
    }
}

/// Resolved user profile.
///
/// Returned by `GET /auth/me`, and embedded in the login response so a fresh
/// login never needs a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Account role
    pub role: Role,

    /// Referral code other users can sign up with
    pub referral_code: String,

    /// Avatar image URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Referral point balance (optional, customer accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
}

/// Credential-exchange response from `POST /auth/login`.
///
/// Carries the access token alongside the full profile payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque bearer token
    pub access_token: String,

    /// Profile fields, flattened in the same payload
    #[serde(flatten)]
    pub user: UserProfile,
}

/// Registration request for `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Plaintext password (sent over TLS, hashed server-side)
    pub password: String,

    /// Account role
    pub role: Role,

    /// Referral code of an existing user (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// Password-change request for `PATCH /auth/change-password`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password
    pub old_password: String,

    /// Replacement password
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_flattens_profile() {
        let body = r#"{
            "accessToken": "tok-1",
            "id": "u-1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "ORGANIZER",
            "referralCode": "ADA123"
        }"#;

        let resp: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.access_token, "tok-1");
        assert_eq!(resp.user.id, "u-1");
        assert_eq!(resp.user.role, Role::Organizer);
        assert_eq!(resp.user.referral_code, "ADA123");
        assert!(resp.user.avatar_url.is_none());
    }

    #[test]
    fn test_role_display_matches_wire_format() {
        assert_eq!(Role::Customer.to_string(), "CUSTOMER");
        assert_eq!(Role::Organizer.to_string(), "ORGANIZER");
    }

    #[test]
    fn test_register_request_omits_empty_referral() {
        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::Customer,
            referral_code: None,
        };

        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("referralCode"));
    }
}
