use serde::{Deserialize, Serialize};

use super::user::UserInfo;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT authentication token
    pub token: String,
    pub user: UserInfo,
}
