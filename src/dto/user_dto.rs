use serde::{Deserialize, Serialize};

use crate::models::user::{User, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub nome: String,
    pub senha: String,
}

/// The `id` handed back on signup is the login handle, not the internal
/// primary key; it is the only identifier the client is expected to keep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedUserResponse {
    pub id: String,
}

/// Both fields optional so a missing one maps to the 400 presence check
/// instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub nomeunico: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: String,
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardPointsPayload {
    pub point: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsAwardedResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAdminPayload {
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdResponse {
    pub id: UserId,
}
