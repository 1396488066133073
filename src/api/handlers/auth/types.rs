//! Request and response types for the auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::storage::PublicUser;

/// Signup payload. Fields are optional so presence checks happen in the
/// validator with a uniform error, not in the deserializer.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SignUpRequest {
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Public profile returned on signup, signin, and session check.
/// Never carries the password hash.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "profilePic")]
    pub profile_pic: Option<String>,
}

impl From<PublicUser> for UserResponse {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name,
            email: user.email,
            profile_pic: user.profile_pic,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn user_response_uses_wire_field_names() {
        let user = PublicUser {
            id: Uuid::nil(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            profile_pic: None,
        };
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            value["_id"],
            "00000000-0000-0000-0000-000000000000".to_string()
        );
        assert_eq!(value["fullName"], "Ada Lovelace");
        assert_eq!(value["email"], "ada@example.com");
        assert!(value["profilePic"].is_null());
        assert!(value.get("password").is_none());
    }

    #[test]
    fn signup_request_tolerates_missing_and_null_fields() {
        let request: SignUpRequest = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert!(request.full_name.is_none());
        assert!(request.email.is_none());
        assert!(request.password.is_none());
    }
}
