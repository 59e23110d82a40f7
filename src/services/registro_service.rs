// src/services/registro_service.rs

use crate::{
    common::error::AppError,
    db::RegistroRepository,
    models::registro::{NovoRegistro, Registro},
    services::calculo::{self, ResumoCalculo},
};

#[derive(Clone)]
pub struct RegistroService {
    repo: RegistroRepository,
}

impl RegistroService {
    pub fn new(repo: RegistroRepository) -> Self {
        Self { repo }
    }

    // Calcula o líquido da empresa e persiste o registro em seguida.
    // O valor gravado é sempre o recalculado aqui.
    pub async fn criar(&self, novo: NovoRegistro) -> Result<Registro, AppError> {
        let resumo = calculo::calcular(&novo.entrada_calculo());
        self.repo.inserir(&novo, resumo.liquido_empresa).await
    }

    // Mesma conta da criação, sem gravar nada: usada pela tela de
    // simulação para mostrar o resultado antes de salvar.
    pub fn simular(&self, novo: &NovoRegistro) -> ResumoCalculo {
        calculo::calcular(&novo.entrada_calculo())
    }

    pub async fn listar(&self, filtro: Option<&str>) -> Result<Vec<Registro>, AppError> {
        self.repo.listar(normalizar_filtro(filtro)).await
    }
}

// Filtro vazio ou só com espaços equivale a nenhum filtro
fn normalizar_filtro(filtro: Option<&str>) -> Option<&str> {
    filtro.map(str::trim).filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtro_ausente_continua_ausente() {
        assert_eq!(normalizar_filtro(None), None);
    }

    #[test]
    fn filtro_vazio_ou_em_branco_vira_ausente() {
        assert_eq!(normalizar_filtro(Some("")), None);
        assert_eq!(normalizar_filtro(Some("   ")), None);
    }

    #[test]
    fn filtro_preenchido_e_mantido_sem_espacos_nas_bordas() {
        assert_eq!(normalizar_filtro(Some(" maria ")), Some("maria"));
    }
}
