// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    models::auth::{Admin, Claims},
};

// Autenticação do único admin do sistema. A identidade (usuário + hash
// bcrypt) vem da configuração e é injetada aqui, o que também facilita os
// testes: não existe usuário global nem tabela de usuários.
#[derive(Clone)]
pub struct AuthService {
    admin: Admin,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(admin: Admin, jwt_secret: String) -> Self {
        Self { admin, jwt_secret }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        if username != self.admin.username {
            return Err(AppError::InvalidCredentials);
        }

        let password_clone = password.to_owned();
        let password_hash_clone = self.admin.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))?
        ?;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token()
    }

    pub fn validate_token(&self, token: &str) -> Result<Admin, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        // Só existe um usuário válido no sistema
        if token_data.claims.sub != self.admin.username {
            return Err(AppError::InvalidToken);
        }

        Ok(self.admin.clone())
    }

    fn create_token(&self) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: self.admin.username.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Custo mínimo do bcrypt para os testes não demorarem
    fn service() -> AuthService {
        let admin = Admin {
            username: "admin".into(),
            password_hash: bcrypt::hash("segredo123", 4).unwrap(),
        };
        AuthService::new(admin, "chave-de-teste".into())
    }

    #[tokio::test]
    async fn login_e_validacao_do_token() {
        let service = service();

        let token = service.login("admin", "segredo123").await.unwrap();
        let admin = service.validate_token(&token).unwrap();

        assert_eq!(admin.username, "admin");
    }

    #[tokio::test]
    async fn senha_errada_recusa_login() {
        let service = service();

        let erro = service.login("admin", "senha-errada").await.unwrap_err();
        assert!(matches!(erro, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn usuario_errado_recusa_login() {
        let service = service();

        let erro = service.login("outro", "segredo123").await.unwrap_err();
        assert!(matches!(erro, AppError::InvalidCredentials));
    }

    #[test]
    fn token_invalido_e_recusado() {
        let service = service();

        let erro = service.validate_token("nao-e-um-token").unwrap_err();
        assert!(matches!(erro, AppError::InvalidToken));
    }

    #[tokio::test]
    async fn token_assinado_com_outra_chave_e_recusado() {
        let service = service();
        let outro = AuthService::new(
            Admin {
                username: "admin".into(),
                password_hash: bcrypt::hash("segredo123", 4).unwrap(),
            },
            "outra-chave".into(),
        );

        let token = outro.login("admin", "segredo123").await.unwrap();
        let erro = service.validate_token(&token).unwrap_err();
        assert!(matches!(erro, AppError::InvalidToken));
    }
}
