use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::user_dto::{
        AwardPointsPayload, CreateUserPayload, CreatedUserResponse, LoginPayload, LoginResponse,
        PointsAwardedResponse, SetAdminPayload, UserIdResponse,
    },
    error::{Error, Result},
    models::user::{User, UserHandle, UserId},
    AppState,
};

#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "Every account, full rows", body = Json<Vec<User>>)
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/usuarios/ranking",
    responses(
        (status = 200, description = "Every account, highest score first", body = Json<Vec<User>>)
    )
)]
#[axum::debug_handler]
pub async fn ranking(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.ranking().await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUserPayload,
    responses(
        (status = 200, description = "Account created; `id` is the login handle", body = Json<CreatedUserResponse>)
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse> {
    let nomeunico = state.user_service.create(payload).await?;
    Ok(Json(CreatedUserResponse { id: nomeunico }))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Credentials match", body = Json<LoginResponse>),
        (status = 400, description = "Missing nomeunico or senha"),
        (status = 404, description = "Unknown handle or wrong password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let (Some(nomeunico), Some(senha)) = (payload.nomeunico, payload.senha) else {
        return Err(Error::BadRequest(
            "nomeunico e senha são obrigatórios".to_string(),
        ));
    };

    let user = match state.user_service.login(&nomeunico, &senha).await {
        Ok(user) => user,
        Err(err) => {
            tracing::error!(error = ?err, "login lookup failed");
            return Err(Error::Internal("Erro interno no servidor".to_string()));
        }
    };

    let Some(user) = user else {
        return Err(Error::NotFound(
            "Usuário não encontrado ou senha incorreta".to_string(),
        ));
    };

    Ok(Json(LoginResponse {
        id: user.nomeunico,
        nome: user.nome,
    }))
}

#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    params(
        ("id" = String, Path, description = "Login handle (nomeunico)")
    ),
    responses(
        (status = 200, description = "Account found", body = Json<User>),
        (status = 404, description = "Unknown handle")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(handle): Path<UserHandle>,
) -> Result<impl IntoResponse> {
    let Some(user) = state.user_service.find_by_handle(&handle).await? else {
        return Err(Error::NotFound("Usuário não encontrado".to_string()));
    };

    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/usuarios/{id}/point",
    params(
        ("id" = String, Path, description = "Login handle (nomeunico)")
    ),
    request_body = AwardPointsPayload,
    responses(
        (status = 200, description = "Points added; body carries the updated row", body = Json<PointsAwardedResponse>),
        (status = 404, description = "Unknown handle")
    )
)]
#[axum::debug_handler]
pub async fn award_points(
    State(state): State<AppState>,
    Path(handle): Path<UserHandle>,
    Json(payload): Json<AwardPointsPayload>,
) -> Result<impl IntoResponse> {
    let Some(user) = state
        .user_service
        .award_points(&handle, payload.point)
        .await?
    else {
        return Err(Error::NotFound("Usuário não encontrado".to_string()));
    };

    Ok(Json(PointsAwardedResponse { user }))
}

#[utoipa::path(
    put,
    path = "/usuarios/{id}/admin",
    params(
        ("id" = String, Path, description = "Internal user ID")
    ),
    request_body = SetAdminPayload,
    responses(
        (status = 200, description = "Flag written; an unknown id is not an error", body = Json<UserIdResponse>)
    )
)]
#[axum::debug_handler]
pub async fn set_admin(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(payload): Json<SetAdminPayload>,
) -> Result<impl IntoResponse> {
    state.user_service.set_admin(&id, payload.is_admin).await?;
    Ok(Json(UserIdResponse { id }))
}

#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    params(
        ("id" = String, Path, description = "Internal user ID")
    ),
    responses(
        (status = 200, description = "Delete issued; an unknown id is not an error", body = Json<UserIdResponse>)
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse> {
    state.user_service.delete(&id).await?;
    Ok(Json(UserIdResponse { id }))
}
