// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::RegistroRepository,
    models::auth::Admin,
    services::{auth::AuthService, registro_service::RegistroService},
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub registro_service: RegistroService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let admin_username = env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME deve ser definido");
        let admin_password_hash =
            env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        // A identidade do admin é injetada no serviço; não existe singleton global.
        let admin = Admin {
            username: admin_username,
            password_hash: admin_password_hash,
        };
        let auth_service = AuthService::new(admin, jwt_secret);

        let registro_repo = RegistroRepository::new(db_pool.clone());
        let registro_service = RegistroService::new(registro_repo);

        Ok(Self {
            db_pool,
            auth_service,
            registro_service,
        })
    }
}
