// src/models/registro.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::AppError;

// --- Structs ---

// Um registro de quitação persistido, com o rateio de comissão já calculado.
// Depois de criado o registro nunca é alterado nem excluído.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registro {
    pub id: i32,

    #[schema(example = "Maria da Silva")]
    pub nome_cliente: String,

    #[schema(example = "123.456.789-00")]
    pub cpf: String,

    #[schema(example = "1000.00")]
    pub valor_quitado: Decimal,

    // Guardada como texto cru, exatamente como veio do formulário
    #[schema(example = "2025-07-31")]
    pub data_quitacao: String,

    pub supervisor: String,
    pub vendedor: String,
    pub investidor: String,

    #[schema(example = 20)]
    pub percentual_investidor: i32,

    #[schema(example = 10)]
    pub percentual_comissao: i32,

    // Campos da fórmula atual; NULL nos registros antigos
    #[schema(example = "500.00")]
    pub valor_contrato: Option<Decimal>,
    #[schema(example = "50.00")]
    pub custo_produto: Option<Decimal>,

    pub investidor_fora: bool,

    // Sempre derivado na inserção, nunca aceito do cliente
    #[schema(example = "720.00")]
    pub liquido_empresa: Decimal,

    pub criado_em: DateTime<Utc>,
}

// Dados do formulário de novo registro. Os campos numéricos chegam como o
// texto cru digitado; a conversão acontece em `converter`, que rejeita
// qualquer valor ausente ou mal formado em vez de assumir zero.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NovoRegistroPayload {
    #[validate(length(min = 1, message = "Informe o nome do cliente."))]
    #[schema(example = "Maria da Silva")]
    pub nome_cliente: String,

    #[validate(length(min = 1, max = 14, message = "O CPF deve ter entre 1 e 14 caracteres."))]
    #[schema(example = "123.456.789-00")]
    pub cpf: String,

    #[schema(example = "1000.00")]
    pub valor_quitado: String,

    #[validate(length(min = 1, max = 10, message = "A data deve ter entre 1 e 10 caracteres."))]
    #[schema(example = "2025-07-31")]
    pub data_quitacao: String,

    #[validate(length(min = 1, message = "Informe o supervisor."))]
    pub supervisor: String,

    #[validate(length(min = 1, message = "Informe o vendedor."))]
    pub vendedor: String,

    #[validate(length(min = 1, message = "Informe o investidor."))]
    pub investidor: String,

    #[schema(example = "20")]
    pub percentual_investidor: String,

    #[schema(example = "10")]
    pub percentual_comissao: String,

    // Quando presentes, o cálculo usa a fórmula atual (contrato - comissão - custo)
    #[schema(example = "500.00")]
    pub valor_contrato: Option<String>,
    #[schema(example = "50.00")]
    pub custo_produto: Option<String>,

    // Checkbox HTML: a simples presença do campo no corpo significa marcado
    pub investidor_fora: Option<String>,
}

// Payload já convertido em números, pronto para cálculo e inserção.
#[derive(Debug, Clone)]
pub struct NovoRegistro {
    pub nome_cliente: String,
    pub cpf: String,
    pub valor_quitado: Decimal,
    pub data_quitacao: String,
    pub supervisor: String,
    pub vendedor: String,
    pub investidor: String,
    pub percentual_investidor: i32,
    pub percentual_comissao: i32,
    pub valor_contrato: Option<Decimal>,
    pub custo_produto: Option<Decimal>,
    pub investidor_fora: bool,
}

// As duas fórmulas históricas de cálculo, escolhidas pelos campos enviados.
// Variante explícita em vez de struct com opcionais: o cálculo nunca precisa
// adivinhar quais campos considerar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntradaCalculo {
    // Fórmula antiga: valor quitado menos custo do investidor e comissão
    Legado {
        valor_quitado: Decimal,
        percentual_investidor: i32,
        percentual_comissao: i32,
        investidor_fora: bool,
    },
    // Fórmula atual: valor de contrato menos comissão e custo do produto
    Atual {
        valor_contrato: Decimal,
        custo_produto: Decimal,
        percentual_comissao: i32,
    },
}

impl NovoRegistroPayload {
    // Converte os campos de texto do formulário em números, escolhendo
    // também qual fórmula o registro vai usar.
    pub fn converter(&self) -> Result<NovoRegistro, AppError> {
        let valor_contrato = texto_preenchido(self.valor_contrato.as_deref());
        let custo_produto = texto_preenchido(self.custo_produto.as_deref());

        // Os campos da fórmula atual andam juntos: ou vêm os dois, ou nenhum
        let (valor_contrato, custo_produto) = match (valor_contrato, custo_produto) {
            (Some(vc), Some(cp)) => (
                Some(parse_decimal("valor_contrato", vc)?),
                Some(parse_decimal("custo_produto", cp)?),
            ),
            (None, None) => (None, None),
            (Some(_), None) => return Err(AppError::InvalidNumericField("custo_produto".into())),
            (None, Some(_)) => return Err(AppError::InvalidNumericField("valor_contrato".into())),
        };

        Ok(NovoRegistro {
            nome_cliente: self.nome_cliente.clone(),
            cpf: self.cpf.clone(),
            valor_quitado: parse_decimal("valor_quitado", &self.valor_quitado)?,
            data_quitacao: self.data_quitacao.clone(),
            supervisor: self.supervisor.clone(),
            vendedor: self.vendedor.clone(),
            investidor: self.investidor.clone(),
            percentual_investidor: parse_inteiro("percentual_investidor", &self.percentual_investidor)?,
            percentual_comissao: parse_inteiro("percentual_comissao", &self.percentual_comissao)?,
            valor_contrato,
            custo_produto,
            investidor_fora: self.investidor_fora.is_some(),
        })
    }
}

impl NovoRegistro {
    pub fn entrada_calculo(&self) -> EntradaCalculo {
        match (self.valor_contrato, self.custo_produto) {
            (Some(valor_contrato), Some(custo_produto)) => EntradaCalculo::Atual {
                valor_contrato,
                custo_produto,
                percentual_comissao: self.percentual_comissao,
            },
            _ => EntradaCalculo::Legado {
                valor_quitado: self.valor_quitado,
                percentual_investidor: self.percentual_investidor,
                percentual_comissao: self.percentual_comissao,
                investidor_fora: self.investidor_fora,
            },
        }
    }
}

// Campo opcional do formulário: string vazia ou só espaços conta como ausente
fn texto_preenchido(bruto: Option<&str>) -> Option<&str> {
    bruto.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_decimal(campo: &str, bruto: &str) -> Result<Decimal, AppError> {
    bruto
        .trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidNumericField(campo.to_owned()))
}

fn parse_inteiro(campo: &str, bruto: &str) -> Result<i32, AppError> {
    bruto
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidNumericField(campo.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn payload_base() -> NovoRegistroPayload {
        NovoRegistroPayload {
            nome_cliente: "Maria da Silva".into(),
            cpf: "123.456.789-00".into(),
            valor_quitado: "1000.00".into(),
            data_quitacao: "2025-07-31".into(),
            supervisor: "Carlos".into(),
            vendedor: "Joana".into(),
            investidor: "Roberto".into(),
            percentual_investidor: "20".into(),
            percentual_comissao: "10".into(),
            valor_contrato: None,
            custo_produto: None,
            investidor_fora: None,
        }
    }

    #[test]
    fn converter_sem_campos_de_contrato_usa_formula_antiga() {
        let novo = payload_base().converter().unwrap();
        assert_eq!(novo.valor_quitado, Decimal::from(1000));
        assert_eq!(novo.valor_contrato, None);
        assert!(!novo.investidor_fora);
        assert!(matches!(novo.entrada_calculo(), EntradaCalculo::Legado { .. }));
    }

    #[test]
    fn converter_com_campos_de_contrato_usa_formula_atual() {
        let mut payload = payload_base();
        payload.valor_contrato = Some("500.00".into());
        payload.custo_produto = Some("50.00".into());

        let novo = payload.converter().unwrap();
        match novo.entrada_calculo() {
            EntradaCalculo::Atual { valor_contrato, custo_produto, percentual_comissao } => {
                assert_eq!(valor_contrato, Decimal::from(500));
                assert_eq!(custo_produto, Decimal::from(50));
                assert_eq!(percentual_comissao, 10);
            }
            outro => panic!("esperava fórmula atual, veio {:?}", outro),
        }
    }

    #[test]
    fn checkbox_presente_marca_investidor_fora() {
        let mut payload = payload_base();
        payload.investidor_fora = Some("on".into());
        assert!(payload.converter().unwrap().investidor_fora);
    }

    #[test]
    fn valor_quitado_nao_numerico_falha() {
        let mut payload = payload_base();
        payload.valor_quitado = "abc".into();

        let erro = payload.converter().unwrap_err();
        assert!(matches!(erro, AppError::InvalidNumericField(ref campo) if campo == "valor_quitado"));
    }

    #[test]
    fn percentual_vazio_falha_em_vez_de_virar_zero() {
        let mut payload = payload_base();
        payload.percentual_investidor = "".into();

        let erro = payload.converter().unwrap_err();
        assert!(matches!(erro, AppError::InvalidNumericField(ref campo) if campo == "percentual_investidor"));
    }

    #[test]
    fn valor_contrato_sem_custo_produto_falha() {
        let mut payload = payload_base();
        payload.valor_contrato = Some("500.00".into());

        let erro = payload.converter().unwrap_err();
        assert!(matches!(erro, AppError::InvalidNumericField(ref campo) if campo == "custo_produto"));
    }

    #[test]
    fn custo_produto_sem_valor_contrato_falha() {
        let mut payload = payload_base();
        payload.custo_produto = Some("50.00".into());

        let erro = payload.converter().unwrap_err();
        assert!(matches!(erro, AppError::InvalidNumericField(ref campo) if campo == "valor_contrato"));
    }

    #[test]
    fn valor_contrato_em_branco_conta_como_ausente() {
        let mut payload = payload_base();
        payload.valor_contrato = Some("   ".into());
        payload.custo_produto = Some("".into());

        let novo = payload.converter().unwrap();
        assert!(matches!(novo.entrada_calculo(), EntradaCalculo::Legado { .. }));
    }

    #[test]
    fn cpf_acima_de_14_caracteres_reprova_na_validacao() {
        let mut payload = payload_base();
        payload.cpf = "123.456.789-00-extra".into();
        assert!(payload.validate().is_err());
    }
}
