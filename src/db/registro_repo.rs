// src/db/registro_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::registro::{NovoRegistro, Registro},
};

// O repositório de registros, responsável por todas as interações com a
// tabela 'registros'. A tabela é append-only: só há INSERT e SELECT.
#[derive(Clone)]
pub struct RegistroRepository {
    pool: PgPool,
}

impl RegistroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Insere um registro; id e criado_em são atribuídos pelo banco.
    pub async fn inserir(
        &self,
        novo: &NovoRegistro,
        liquido_empresa: Decimal,
    ) -> Result<Registro, AppError> {
        let registro = sqlx::query_as::<_, Registro>(
            r#"
            INSERT INTO registros (
                nome_cliente, cpf, valor_quitado, data_quitacao,
                supervisor, vendedor, investidor,
                percentual_investidor, percentual_comissao,
                valor_contrato, custo_produto,
                investidor_fora, liquido_empresa
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&novo.nome_cliente)
        .bind(&novo.cpf)
        .bind(novo.valor_quitado)
        .bind(&novo.data_quitacao)
        .bind(&novo.supervisor)
        .bind(&novo.vendedor)
        .bind(&novo.investidor)
        .bind(novo.percentual_investidor)
        .bind(novo.percentual_comissao)
        .bind(novo.valor_contrato)
        .bind(novo.custo_produto)
        .bind(novo.investidor_fora)
        .bind(liquido_empresa)
        .fetch_one(&self.pool)
        .await?;

        Ok(registro)
    }

    // Lista todos os registros, do mais recente para o mais antigo. Com
    // filtro, busca a substring (sem diferenciar maiúsculas) em qualquer um
    // dos cinco campos pesquisáveis.
    pub async fn listar(&self, filtro: Option<&str>) -> Result<Vec<Registro>, AppError> {
        let registros = match filtro {
            Some(filtro) => {
                sqlx::query_as::<_, Registro>(
                    r#"
                    SELECT * FROM registros
                    WHERE nome_cliente ILIKE $1
                       OR cpf ILIKE $1
                       OR vendedor ILIKE $1
                       OR supervisor ILIKE $1
                       OR investidor ILIKE $1
                    ORDER BY criado_em DESC, id DESC
                    "#,
                )
                .bind(padrao_busca(filtro))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Registro>(
                    "SELECT * FROM registros ORDER BY criado_em DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(registros)
    }
}

fn padrao_busca(filtro: &str) -> String {
    format!("%{}%", filtro)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padrao_busca_envolve_o_termo_em_curingas() {
        assert_eq!(padrao_busca("maria"), "%maria%");
        assert_eq!(padrao_busca("123.456"), "%123.456%");
    }
}
