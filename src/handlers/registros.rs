// src/handlers/registros.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AdminAutenticado,
    models::registro::{NovoRegistroPayload, Registro},
    services::calculo::ResumoCalculo,
};

#[derive(Debug, Deserialize)]
pub struct FiltroRegistros {
    pub q: Option<String>,
}

// POST /api/registros
#[utoipa::path(
    post,
    path = "/api/registros",
    tag = "Registros",
    request_body(content = NovoRegistroPayload, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Registro criado com o líquido já calculado", body = Registro),
        (status = 400, description = "Campo obrigatório ausente ou numérico mal formado"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar_registro(
    State(app_state): State<AppState>,
    _admin: AdminAutenticado,
    Form(payload): Form<NovoRegistroPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let novo = payload.converter()?;
    let registro = app_state.registro_service.criar(novo).await?;

    Ok((StatusCode::CREATED, Json(registro)))
}

// GET /api/registros?q=...
#[utoipa::path(
    get,
    path = "/api/registros",
    tag = "Registros",
    params(
        ("q" = Option<String>, Query, description = "Busca por cliente, CPF, vendedor, supervisor ou investidor")
    ),
    responses(
        (status = 200, description = "Registros do mais recente para o mais antigo", body = Vec<Registro>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_registros(
    State(app_state): State<AppState>,
    _admin: AdminAutenticado,
    Query(filtro): Query<FiltroRegistros>,
) -> Result<Json<Vec<Registro>>, AppError> {
    let registros = app_state
        .registro_service
        .listar(filtro.q.as_deref())
        .await?;

    Ok(Json(registros))
}

// POST /api/registros/simulacao
// Mesma conta da criação, sem persistir: o formulário usa isso para
// mostrar o líquido antes de salvar.
#[utoipa::path(
    post,
    path = "/api/registros/simulacao",
    tag = "Registros",
    request_body(content = NovoRegistroPayload, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Rateio calculado, nada gravado", body = ResumoCalculo),
        (status = 400, description = "Campo obrigatório ausente ou numérico mal formado"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn simular_registro(
    State(app_state): State<AppState>,
    _admin: AdminAutenticado,
    Form(payload): Form<NovoRegistroPayload>,
) -> Result<Json<ResumoCalculo>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let novo = payload.converter()?;
    Ok(Json(app_state.registro_service.simular(&novo)))
}
