use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A quiz question as stored in the `perguntas` table.
///
/// `correct_index` points into `alternatives`; the bound is not checked
/// anywhere, callers are trusted to send a consistent pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub alternatives: Vec<String>,
    pub correct_index: i32,
    pub category: Option<String>,
    pub level: Option<String>,
    pub tags: Option<Vec<String>>,
    pub points: i32,
}
