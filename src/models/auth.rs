// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// O único usuário administrativo do sistema. Não existe tabela de usuários:
// a identidade vem da configuração do processo e é injetada no AuthService.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[schema(example = "admin")]
    pub username: String,

    // IMPORTANTE para segurança: o hash nunca sai na resposta
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: String,
}

// Dados do formulário de login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "Informe o usuário."))]
    #[schema(example = "admin")]
    pub username: String,

    #[validate(length(min = 1, message = "Informe a senha."))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (username do admin)
    pub exp: usize,  // Expiration time (quando o token expira)
    pub iat: usize,  // Issued At (quando o token foi criado)
}
