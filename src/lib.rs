pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{question_service::QuestionService, user_service::UserService};
use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub question_service: QuestionService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let question_service = QuestionService::new(pool.clone());
        let user_service = UserService::new(pool.clone());

        Self {
            pool,
            question_service,
            user_service,
        }
    }
}

/// The full route table. `main` adds the CORS and tracing layers on top;
/// tests drive this router directly.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/perguntas",
            get(routes::questions::list_questions).post(routes::questions::create_question),
        )
        .route(
            "/perguntas/:id",
            put(routes::questions::update_question).delete(routes::questions::delete_question),
        )
        .route(
            "/usuarios",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/usuarios/ranking", get(routes::users::ranking))
        .route("/login", post(routes::users::login))
        .route(
            "/usuarios/:id",
            get(routes::users::get_user).delete(routes::users::delete_user),
        )
        .route("/usuarios/:id/point", put(routes::users::award_points))
        .route("/usuarios/:id/admin", put(routes::users::set_admin))
        .with_state(state)
}
