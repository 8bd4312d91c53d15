// src/types/auth.rs
//! Sign-up, sign-in and current-user shapes

use serde::{Deserialize, Serialize};

/// Value the server expects in `info.successCode` when signing up
const SUCCESS_CODE: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "APPLICANT")]
    Applicant,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthType {
    #[serde(rename = "APPLICANT")]
    Applicant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub user_role: UserRole,
}

/// Result of both `POST /api/auth/user` and `POST /api/auth/user/session`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResult {
    pub user: AuthUser,
    pub token: String,
}

/// `GET /api/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub user_role: UserRole,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpInfo {
    #[serde(rename = "type")]
    pub info_type: AuthType,
    pub name: String,
    pub email: String,
    pub password: String,
    pub success_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub auth_type: AuthType,
    pub info: SignUpInfo,
}

impl SignUpRequest {
    pub fn applicant(name: &str, email: &str, password: &str) -> Self {
        Self {
            auth_type: AuthType::Applicant,
            info: SignUpInfo {
                info_type: AuthType::Applicant,
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                success_code: SUCCESS_CODE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_up_request_wire_shape() {
        let req = SignUpRequest::applicant("Kim", "kim@snu.ac.kr", "pw");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "authType": "APPLICANT",
                "info": {
                    "type": "APPLICANT",
                    "name": "Kim",
                    "email": "kim@snu.ac.kr",
                    "password": "pw",
                    "successCode": "ok"
                }
            })
        );
    }

    #[test]
    fn test_unknown_role_is_preserved_as_other() {
        let user: AuthUser =
            serde_json::from_value(json!({"id": "u1", "userRole": "COMPANY"})).unwrap();
        assert_eq!(user.user_role, UserRole::Other);
    }
}
