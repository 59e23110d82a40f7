// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Registros ---
        handlers::registros::criar_registro,
        handlers::registros::listar_registros,
        handlers::registros::simular_registro,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Admin,
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Registros ---
            models::registro::Registro,
            models::registro::NovoRegistroPayload,
            services::calculo::ResumoCalculo,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação do administrador"),
        (name = "Users", description = "Dados do usuário autenticado"),
        (name = "Registros", description = "Registros de quitação e rateio de comissão")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
