use axum::{extract::State, Form, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AdminAutenticado,
    models::auth::{Admin, AuthResponse, LoginPayload},
};

// Handler de login: o formulário envia usuário e senha como texto
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body(content = LoginPayload, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login efetuado", body = AuthResponse),
        (status = 401, description = "Usuário ou senha inválidos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Form(payload): Form<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Admin autenticado", body = Admin),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AdminAutenticado(admin): AdminAutenticado) -> Json<Admin> {
    Json(admin)
}
