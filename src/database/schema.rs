use crate::error::Result;
use sqlx::PgPool;

const CREATE_PERGUNTAS: &str = r#"
CREATE TABLE IF NOT EXISTS perguntas (
    id TEXT PRIMARY KEY,
    text TEXT NOT NULL,
    alternatives TEXT[] NOT NULL,
    correct_index INTEGER NOT NULL,
    category TEXT,
    level TEXT,
    tags TEXT[],
    points INTEGER DEFAULT 10
)
"#;

const CREATE_USUARIOS: &str = r#"
CREATE TABLE IF NOT EXISTS usuarios (
    id TEXT PRIMARY KEY,
    nome TEXT NOT NULL,
    total_pontos INTEGER DEFAULT 0,
    nomeunico TEXT NOT NULL UNIQUE,
    senha TEXT NOT NULL,
    is_admin BOOLEAN DEFAULT FALSE
)
"#;

/// Creates both tables if they do not exist yet. Safe to run on every
/// process start; there is no migration versioning beyond this.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_PERGUNTAS).execute(pool).await?;
    sqlx::query(CREATE_USUARIOS).execute(pool).await?;
    Ok(())
}
