use crate::dto::user_dto::CreateUserPayload;
use crate::error::Result;
use crate::models::user::{User, UserHandle, UserId};
use crate::utils::id::{generate_handle, generate_unique_id};
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, nome, nomeunico, senha, total_pontos, is_admin";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let query = format!("SELECT {} FROM usuarios", USER_COLUMNS);
        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Leaderboard: every user, highest score first. The table is small
    /// enough that the sort happens here rather than in the store.
    pub async fn ranking(&self) -> Result<Vec<User>> {
        let mut users = self.list().await?;
        sort_by_points_desc(&mut users);
        Ok(users)
    }

    /// Inserts a fresh account and returns its login handle. The handle is
    /// derived from the creation instant; the unique index on `nomeunico`
    /// rejects a second account created in the same millisecond.
    pub async fn create(&self, payload: CreateUserPayload) -> Result<String> {
        let id = generate_unique_id();
        let nomeunico = generate_handle();

        sqlx::query(
            r#"
            INSERT INTO usuarios (id, nome, senha, total_pontos, nomeunico, is_admin)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&id)
        .bind(&payload.nome)
        .bind(&payload.senha)
        .bind(0_i32)
        .bind(&nomeunico)
        .bind(false)
        .execute(&self.pool)
        .await?;

        Ok(nomeunico)
    }

    /// Exact-match credential lookup, at most one row.
    pub async fn login(&self, nomeunico: &str, senha: &str) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM usuarios WHERE nomeunico = $1 AND senha = $2 LIMIT 1",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(nomeunico)
            .bind(senha)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_handle(&self, handle: &UserHandle) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM usuarios WHERE nomeunico = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&handle.0)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Adds `point` to the stored total in a single statement, so two
    /// concurrent awards to the same user both land. Returns the row as it
    /// stands after the update, or `None` for an unknown handle.
    pub async fn award_points(&self, handle: &UserHandle, point: i32) -> Result<Option<User>> {
        let query = format!(
            "UPDATE usuarios SET total_pontos = total_pontos + $1 WHERE nomeunico = $2 RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(point)
            .bind(&handle.0)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Unconditional flag write keyed by the internal id. No existence
    /// check and no caller authorization, matching the endpoint contract.
    pub async fn set_admin(&self, id: &UserId, is_admin: bool) -> Result<()> {
        sqlx::query("UPDATE usuarios SET is_admin = $1 WHERE id = $2")
            .bind(is_admin)
            .bind(&id.0)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &UserId) -> Result<()> {
        sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(&id.0)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn sort_by_points_desc(users: &mut [User]) {
    users.sort_by(|a, b| b.total_pontos.cmp(&a.total_pontos));
}
