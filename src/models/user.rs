use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A player account as stored in the `usuarios` table.
///
/// `id` is the internal primary key; `nomeunico` is the login handle the
/// client actually holds. Responses serialize the full row, `senha`
/// included (plaintext credentials are a stated property of this API).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub nome: String,
    pub nomeunico: String,
    pub senha: String,
    pub total_pontos: i32,
    pub is_admin: bool,
}

/// Internal primary key of a user row.
///
/// The `:id` path segment means different things on different user
/// endpoints. Each handler extracts either `UserId` or `UserHandle` so the
/// keying is visible in its signature instead of being an untyped string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// The externally-used login handle (`nomeunico` column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHandle(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for UserHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
