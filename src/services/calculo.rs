// src/services/calculo.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::registro::EntradaCalculo;

// Resultado do rateio de comissão. Além do líquido, devolvemos os valores
// intermediários para a tela de simulação exibir a conta completa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoCalculo {
    // Zero na fórmula atual, que não rateia com investidor
    #[schema(example = "200.00")]
    pub custo_investidor: Decimal,

    #[schema(example = "800.00")]
    pub base_comissao: Decimal,

    #[schema(example = "80.00")]
    pub valor_comissao: Decimal,

    // Taxa fixa de 4,5% aplicada apenas a investidor de fora, na fórmula antiga
    #[schema(example = "0.00")]
    pub custo_externo: Decimal,

    #[schema(example = "720.00")]
    pub liquido_empresa: Decimal,
}

// Função pura: não toca no banco nem em nenhum outro colaborador.
pub fn calcular(entrada: &EntradaCalculo) -> ResumoCalculo {
    match *entrada {
        EntradaCalculo::Legado {
            valor_quitado,
            percentual_investidor,
            percentual_comissao,
            investidor_fora,
        } => {
            let custo_investidor = valor_quitado * fracao(percentual_investidor);
            let base_comissao = valor_quitado - custo_investidor;
            let valor_comissao = base_comissao * fracao(percentual_comissao);
            let custo_externo = if investidor_fora {
                // 4,5% sobre o valor quitado
                valor_quitado * Decimal::new(45, 3)
            } else {
                Decimal::ZERO
            };
            let liquido_empresa =
                valor_quitado - custo_investidor - valor_comissao - custo_externo;

            ResumoCalculo {
                custo_investidor,
                base_comissao,
                valor_comissao,
                custo_externo,
                liquido_empresa,
            }
        }
        EntradaCalculo::Atual {
            valor_contrato,
            custo_produto,
            percentual_comissao,
        } => {
            let valor_comissao = valor_contrato * fracao(percentual_comissao);
            let liquido_empresa = valor_contrato - valor_comissao - custo_produto;

            ResumoCalculo {
                custo_investidor: Decimal::ZERO,
                base_comissao: valor_contrato,
                valor_comissao,
                custo_externo: Decimal::ZERO,
                liquido_empresa,
            }
        }
    }
}

// Percentual inteiro (0-100) como fração decimal exata
fn fracao(percentual: i32) -> Decimal {
    Decimal::from(percentual) / Decimal::from(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(texto: &str) -> Decimal {
        texto.parse().unwrap()
    }

    #[test]
    fn formula_antiga_sem_investidor_fora() {
        let resumo = calcular(&EntradaCalculo::Legado {
            valor_quitado: Decimal::from(1000),
            percentual_investidor: 20,
            percentual_comissao: 10,
            investidor_fora: false,
        });

        assert_eq!(resumo.custo_investidor, Decimal::from(200));
        assert_eq!(resumo.base_comissao, Decimal::from(800));
        assert_eq!(resumo.valor_comissao, Decimal::from(80));
        assert_eq!(resumo.custo_externo, Decimal::ZERO);
        assert_eq!(resumo.liquido_empresa, Decimal::from(720));
    }

    #[test]
    fn formula_antiga_com_investidor_fora() {
        let resumo = calcular(&EntradaCalculo::Legado {
            valor_quitado: Decimal::from(1000),
            percentual_investidor: 20,
            percentual_comissao: 10,
            investidor_fora: true,
        });

        assert_eq!(resumo.custo_externo, Decimal::from(45));
        assert_eq!(resumo.liquido_empresa, Decimal::from(675));
    }

    #[test]
    fn formula_atual() {
        let resumo = calcular(&EntradaCalculo::Atual {
            valor_contrato: Decimal::from(500),
            custo_produto: Decimal::from(50),
            percentual_comissao: 10,
        });

        assert_eq!(resumo.valor_comissao, Decimal::from(50));
        assert_eq!(resumo.liquido_empresa, Decimal::from(400));
        assert_eq!(resumo.custo_investidor, Decimal::ZERO);
        assert_eq!(resumo.custo_externo, Decimal::ZERO);
    }

    #[test]
    fn formula_atual_com_centavos_e_exata() {
        let resumo = calcular(&EntradaCalculo::Atual {
            valor_contrato: dec("1234.56"),
            custo_produto: dec("100.10"),
            percentual_comissao: 7,
        });

        // 1234.56 * 0.07 = 86.4192; 1234.56 - 86.4192 - 100.10 = 1048.0408
        assert_eq!(resumo.valor_comissao, dec("86.4192"));
        assert_eq!(resumo.liquido_empresa, dec("1048.0408"));
    }

    #[test]
    fn percentuais_zerados_devolvem_o_valor_cheio() {
        let resumo = calcular(&EntradaCalculo::Legado {
            valor_quitado: Decimal::from(1000),
            percentual_investidor: 0,
            percentual_comissao: 0,
            investidor_fora: false,
        });

        assert_eq!(resumo.custo_investidor, Decimal::ZERO);
        assert_eq!(resumo.base_comissao, Decimal::from(1000));
        assert_eq!(resumo.liquido_empresa, Decimal::from(1000));
    }

    #[test]
    fn percentual_total_zera_o_liquido() {
        let resumo = calcular(&EntradaCalculo::Atual {
            valor_contrato: Decimal::from(500),
            custo_produto: Decimal::ZERO,
            percentual_comissao: 100,
        });

        assert_eq!(resumo.valor_comissao, Decimal::from(500));
        assert_eq!(resumo.liquido_empresa, Decimal::ZERO);
    }
}
