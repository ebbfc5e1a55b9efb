use crate::dto::question_dto::QuestionPayload;
use crate::error::Result;
use crate::models::question::Question;
use crate::utils::id::generate_unique_id;
use sqlx::PgPool;

const QUESTION_COLUMNS: &str =
    "id, text, alternatives, correct_index, category, level, tags, points";

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Question>> {
        let query = format!("SELECT {} FROM perguntas", QUESTION_COLUMNS);
        let questions = sqlx::query_as::<_, Question>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(questions)
    }

    pub async fn create(&self, payload: QuestionPayload) -> Result<String> {
        let id = generate_unique_id();

        sqlx::query(
            r#"
            INSERT INTO perguntas (id, text, alternatives, correct_index, category, level, tags, points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&id)
        .bind(&payload.text)
        .bind(&payload.alternatives)
        .bind(payload.correct_index)
        .bind(&payload.category)
        .bind(&payload.level)
        .bind(&payload.tags)
        .bind(payload.effective_points())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Full-row replace. An id that matches no row updates nothing and is
    /// still reported as success.
    pub async fn update(&self, id: &str, payload: QuestionPayload) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE perguntas
            SET text = $1, alternatives = $2, correct_index = $3, category = $4,
                level = $5, tags = $6, points = $7
            WHERE id = $8
            "#,
        )
        .bind(&payload.text)
        .bind(&payload.alternatives)
        .bind(payload.correct_index)
        .bind(&payload.category)
        .bind(&payload.level)
        .bind(&payload.tags)
        .bind(payload.effective_points())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM perguntas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
