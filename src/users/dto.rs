use serde::{Deserialize, Serialize};

use crate::users::repo::User;

/// Request body for user registration. Fields arrive as plain strings with
/// no format validation.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    /// Accepted but not persisted; see the profile table stub in `schema`.
    pub profile_picture: String,
}

/// Public part of the user returned to the client. The stored password is
/// never part of this shape.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_omits_password() {
        let user = User {
            id: 1,
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            phone: "+44123456".to_string(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("ada@example.com"));
        assert!(json.contains("Ada Lovelace"));
        assert!(!json.contains("password"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn register_request_accepts_profile_picture() {
        let payload: RegisterRequest = serde_json::from_str(
            r#"{
                "full_name": "Ada Lovelace",
                "email": "ada@example.com",
                "password": "hunter2",
                "phone": "+44123456",
                "profile_picture": "https://example.com/ada.png"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.profile_picture, "https://example.com/ada.png");
    }
}
