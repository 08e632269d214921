//! Pedido, a sales order. Items ride along as free JSON; totals, freight and
//! the fiscal snapshot live in dedicated columns.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::{PedidoModalidadeFrete, PedidoSituacao};
use crate::merge_update;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pedido {
    pub id: RecordId,
    pub id_cliente: Option<RecordId>,
    pub id_vendedor: Option<RecordId>,
    pub id_transportadora: Option<RecordId>,
    pub origem_venda: Option<String>,
    pub situacao: PedidoSituacao,
    pub data_emissao: Option<NaiveDate>,
    pub data_validade: Option<NaiveDate>,
    pub data_finalizacao: Option<NaiveDate>,
    pub prazo_entrega: Option<i64>,
    pub itens: Option<serde_json::Value>,
    pub total: Option<Decimal>,
    pub desconto: Option<Decimal>,
    pub total_desconto: Option<Decimal>,
    pub pagamento: Option<String>,
    pub modalidade_frete: PedidoModalidadeFrete,
    pub valor_frete: Option<Decimal>,
    pub natureza_operacao: Option<String>,
    pub cfop: Option<String>,
    pub icms_cst: Option<String>,
    pub icms_aliquota: Option<Decimal>,
    pub icms_reducao_bc_perc: Option<Decimal>,
    pub icms_st_cst: Option<String>,
    pub icms_st_mva_perc: Option<Decimal>,
    pub icms_st_aliquota: Option<Decimal>,
    pub ipi_cst: Option<String>,
    pub ipi_aliquota: Option<Decimal>,
    pub pis_cst: Option<String>,
    pub pis_aliquota: Option<Decimal>,
    pub cofins_cst: Option<String>,
    pub cofins_aliquota: Option<Decimal>,
    pub ordem_finalizacao: Option<Decimal>,
    pub observacao: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PedidoCreate {
    #[serde(default)]
    pub id_cliente: Option<RecordId>,
    #[serde(default)]
    pub id_vendedor: Option<RecordId>,
    #[serde(default)]
    pub id_transportadora: Option<RecordId>,
    #[serde(default)]
    pub origem_venda: Option<String>,
    #[serde(default)]
    pub situacao: PedidoSituacao,
    /// Defaults to the current date when absent.
    #[serde(default)]
    pub data_emissao: Option<NaiveDate>,
    #[serde(default)]
    pub data_validade: Option<NaiveDate>,
    #[serde(default)]
    pub data_finalizacao: Option<NaiveDate>,
    #[serde(default)]
    pub prazo_entrega: Option<i64>,
    #[serde(default)]
    pub itens: Option<serde_json::Value>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub desconto: Option<Decimal>,
    #[serde(default)]
    pub total_desconto: Option<Decimal>,
    #[serde(default)]
    pub pagamento: Option<String>,
    #[serde(default)]
    pub modalidade_frete: PedidoModalidadeFrete,
    #[serde(default)]
    pub valor_frete: Option<Decimal>,
    #[serde(default)]
    pub natureza_operacao: Option<String>,
    #[serde(default)]
    pub cfop: Option<String>,
    #[serde(default)]
    pub icms_cst: Option<String>,
    #[serde(default)]
    pub icms_aliquota: Option<Decimal>,
    #[serde(default)]
    pub icms_reducao_bc_perc: Option<Decimal>,
    #[serde(default)]
    pub icms_st_cst: Option<String>,
    #[serde(default)]
    pub icms_st_mva_perc: Option<Decimal>,
    #[serde(default)]
    pub icms_st_aliquota: Option<Decimal>,
    #[serde(default)]
    pub ipi_cst: Option<String>,
    #[serde(default)]
    pub ipi_aliquota: Option<Decimal>,
    #[serde(default)]
    pub pis_cst: Option<String>,
    #[serde(default)]
    pub pis_aliquota: Option<Decimal>,
    #[serde(default)]
    pub cofins_cst: Option<String>,
    #[serde(default)]
    pub cofins_aliquota: Option<Decimal>,
    #[serde(default)]
    pub ordem_finalizacao: Option<Decimal>,
    #[serde(default)]
    pub observacao: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PedidoUpdate {
    pub id_cliente: Option<RecordId>,
    pub id_vendedor: Option<RecordId>,
    pub id_transportadora: Option<RecordId>,
    pub origem_venda: Option<String>,
    pub situacao: Option<PedidoSituacao>,
    pub data_emissao: Option<NaiveDate>,
    pub data_validade: Option<NaiveDate>,
    pub data_finalizacao: Option<NaiveDate>,
    pub prazo_entrega: Option<i64>,
    pub itens: Option<serde_json::Value>,
    pub total: Option<Decimal>,
    pub desconto: Option<Decimal>,
    pub total_desconto: Option<Decimal>,
    pub pagamento: Option<String>,
    pub modalidade_frete: Option<PedidoModalidadeFrete>,
    pub valor_frete: Option<Decimal>,
    pub natureza_operacao: Option<String>,
    pub cfop: Option<String>,
    pub icms_cst: Option<String>,
    pub icms_aliquota: Option<Decimal>,
    pub icms_reducao_bc_perc: Option<Decimal>,
    pub icms_st_cst: Option<String>,
    pub icms_st_mva_perc: Option<Decimal>,
    pub icms_st_aliquota: Option<Decimal>,
    pub ipi_cst: Option<String>,
    pub ipi_aliquota: Option<Decimal>,
    pub pis_cst: Option<String>,
    pub pis_aliquota: Option<Decimal>,
    pub cofins_cst: Option<String>,
    pub cofins_aliquota: Option<Decimal>,
    pub ordem_finalizacao: Option<Decimal>,
    pub observacao: Option<String>,
}

const TAB_PRINCIPAL: &str = "Principal";
const TAB_DATAS: &str = "Datas e Prazos";
const TAB_ITENS: &str = "Itens";
const TAB_VALORES: &str = "Valores";
const TAB_FRETE: &str = "Frete";
const TAB_FISCAL: &str = "Fiscal";
const TAB_OBS: &str = "Observações";

impl Record for Pedido {
    type Create = PedidoCreate;
    type Update = PedidoUpdate;

    const TYPE_NAME: &'static str = "Pedido";
    const TABLE_NAME: &'static str = "pedidos";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("id_cliente", ColumnKind::Integer)
            .tab(TAB_PRINCIPAL)
            .references("cadastros"),
        ColumnDef::new("id_vendedor", ColumnKind::Integer)
            .tab(TAB_PRINCIPAL)
            .references("cadastros"),
        ColumnDef::new("id_transportadora", ColumnKind::Integer)
            .tab(TAB_FRETE)
            .references("cadastros"),
        ColumnDef::new("origem_venda", ColumnKind::Text).tab(TAB_PRINCIPAL),
        ColumnDef::new("situacao", ColumnKind::Enum { members: PedidoSituacao::MEMBERS })
            .required()
            .tab(TAB_PRINCIPAL),
        ColumnDef::new("data_emissao", ColumnKind::Date).tab(TAB_DATAS),
        ColumnDef::new("data_validade", ColumnKind::Date).tab(TAB_DATAS),
        ColumnDef::new("data_finalizacao", ColumnKind::Date).tab(TAB_DATAS),
        ColumnDef::new("prazo_entrega", ColumnKind::Integer).tab(TAB_DATAS),
        ColumnDef::new("itens", ColumnKind::Json).tab(TAB_ITENS),
        ColumnDef::new("total", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
        ColumnDef::new("desconto", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
        ColumnDef::new("total_desconto", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
        ColumnDef::new("pagamento", ColumnKind::Text).tab(TAB_VALORES),
        ColumnDef::new("modalidade_frete", ColumnKind::Enum { members: PedidoModalidadeFrete::MEMBERS })
            .tab(TAB_FRETE),
        ColumnDef::new("valor_frete", ColumnKind::Numeric { scale: 2 }).tab(TAB_FRETE),
        ColumnDef::new("natureza_operacao", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("cfop", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("icms_cst", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("icms_aliquota", ColumnKind::Numeric { scale: 2 })
            .mask("percent:2")
            .tab(TAB_FISCAL),
        ColumnDef::new("icms_reducao_bc_perc", ColumnKind::Numeric { scale: 2 })
            .mask("percent:2")
            .tab(TAB_FISCAL),
        ColumnDef::new("icms_st_cst", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("icms_st_mva_perc", ColumnKind::Numeric { scale: 2 })
            .mask("percent:2")
            .tab(TAB_FISCAL),
        ColumnDef::new("icms_st_aliquota", ColumnKind::Numeric { scale: 2 })
            .mask("percent:2")
            .tab(TAB_FISCAL),
        ColumnDef::new("ipi_cst", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("ipi_aliquota", ColumnKind::Numeric { scale: 2 })
            .mask("percent:2")
            .tab(TAB_FISCAL),
        ColumnDef::new("pis_cst", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("pis_aliquota", ColumnKind::Numeric { scale: 2 })
            .mask("percent:2")
            .tab(TAB_FISCAL),
        ColumnDef::new("cofins_cst", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("cofins_aliquota", ColumnKind::Numeric { scale: 2 })
            .mask("percent:2")
            .tab(TAB_FISCAL),
        ColumnDef::new("ordem_finalizacao", ColumnKind::Numeric { scale: 1 }).tab(TAB_DATAS),
        ColumnDef::new("observacao", ColumnKind::Text).tab(TAB_OBS),
        ColumnDef::new("criado_em", ColumnKind::DateTime),
        ColumnDef::new("atualizado_em", ColumnKind::DateTime),
        ColumnDef::new("id_empresa", ColumnKind::Integer)
            .required()
            .references("empresas"),
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn tenant_id(&self) -> TenantId {
        self.id_empresa
    }

    fn from_create(input: Self::Create, tenant: TenantId, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            id_cliente: input.id_cliente,
            id_vendedor: input.id_vendedor,
            id_transportadora: input.id_transportadora,
            origem_venda: input.origem_venda,
            situacao: input.situacao,
            data_emissao: Some(input.data_emissao.unwrap_or_else(|| now.date_naive())),
            data_validade: input.data_validade,
            data_finalizacao: input.data_finalizacao,
            prazo_entrega: input.prazo_entrega,
            itens: input.itens,
            total: input.total,
            desconto: input.desconto,
            total_desconto: input.total_desconto,
            pagamento: input.pagamento,
            modalidade_frete: input.modalidade_frete,
            valor_frete: input.valor_frete,
            natureza_operacao: input.natureza_operacao,
            cfop: input.cfop,
            icms_cst: input.icms_cst,
            icms_aliquota: input.icms_aliquota,
            icms_reducao_bc_perc: input.icms_reducao_bc_perc,
            icms_st_cst: input.icms_st_cst,
            icms_st_mva_perc: input.icms_st_mva_perc,
            icms_st_aliquota: input.icms_st_aliquota,
            ipi_cst: input.ipi_cst,
            ipi_aliquota: input.ipi_aliquota,
            pis_cst: input.pis_cst,
            pis_aliquota: input.pis_aliquota,
            cofins_cst: input.cofins_cst,
            cofins_aliquota: input.cofins_aliquota,
            ordem_finalizacao: input.ordem_finalizacao,
            observacao: input.observacao,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [situacao, modalidade_frete],
            optional: [
                id_cliente, id_vendedor, id_transportadora, origem_venda,
                data_emissao, data_validade, data_finalizacao, prazo_entrega,
                itens, total, desconto, total_desconto, pagamento, valor_frete,
                natureza_operacao, cfop, icms_cst, icms_aliquota,
                icms_reducao_bc_perc, icms_st_cst, icms_st_mva_perc,
                icms_st_aliquota, ipi_cst, ipi_aliquota, pis_cst, pis_aliquota,
                cofins_cst, cofins_aliquota, ordem_finalizacao, observacao,
            ]);
        self.atualizado_em = Some(now);
    }
}
