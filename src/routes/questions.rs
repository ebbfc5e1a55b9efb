use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::question_dto::{QuestionIdResponse, QuestionPayload},
    error::Result,
    models::question::Question,
    AppState,
};

#[utoipa::path(
    get,
    path = "/perguntas",
    responses(
        (status = 200, description = "Every stored question", body = Json<Vec<Question>>)
    )
)]
#[axum::debug_handler]
pub async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let questions = state.question_service.list().await?;
    Ok(Json(questions))
}

#[utoipa::path(
    post,
    path = "/perguntas",
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Question created", body = Json<QuestionIdResponse>)
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse> {
    let id = state.question_service.create(payload).await?;
    Ok(Json(QuestionIdResponse { id }))
}

#[utoipa::path(
    put,
    path = "/perguntas/{id}",
    params(
        ("id" = String, Path, description = "Question ID")
    ),
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Update issued; an unknown id is not an error", body = Json<QuestionIdResponse>)
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse> {
    state.question_service.update(&id, payload).await?;
    Ok(Json(QuestionIdResponse { id }))
}

#[utoipa::path(
    delete,
    path = "/perguntas/{id}",
    params(
        ("id" = String, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Delete issued; an unknown id is not an error", body = Json<QuestionIdResponse>)
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.question_service.delete(&id).await?;
    Ok(Json(QuestionIdResponse { id }))
}
