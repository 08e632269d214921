//! Conta, a payable or receivable entry.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::{ContaSituacao, ContaTipo};
use crate::merge_update;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conta {
    pub id: RecordId,
    pub tipo_conta: ContaTipo,
    pub situacao: ContaSituacao,
    pub descricao: Option<String>,
    pub numero_conta: Option<i64>,
    pub id_fornecedor: Option<RecordId>,
    pub valor: Decimal,
    pub plano_contas: Option<String>,
    pub caixa_destino_origem: Option<String>,
    pub pagamento: Option<String>,
    pub data_emissao: Option<NaiveDate>,
    pub data_vencimento: Option<NaiveDate>,
    pub data_baixa: Option<NaiveDate>,
    pub observacoes: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContaCreate {
    #[serde(default)]
    pub tipo_conta: ContaTipo,
    #[serde(default)]
    pub situacao: ContaSituacao,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub numero_conta: Option<i64>,
    #[serde(default)]
    pub id_fornecedor: Option<RecordId>,
    pub valor: Decimal,
    #[serde(default)]
    pub plano_contas: Option<String>,
    #[serde(default)]
    pub caixa_destino_origem: Option<String>,
    #[serde(default)]
    pub pagamento: Option<String>,
    #[serde(default)]
    pub data_emissao: Option<NaiveDate>,
    #[serde(default)]
    pub data_vencimento: Option<NaiveDate>,
    #[serde(default)]
    pub data_baixa: Option<NaiveDate>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContaUpdate {
    pub tipo_conta: Option<ContaTipo>,
    pub situacao: Option<ContaSituacao>,
    pub descricao: Option<String>,
    pub numero_conta: Option<i64>,
    pub id_fornecedor: Option<RecordId>,
    pub valor: Option<Decimal>,
    pub plano_contas: Option<String>,
    pub caixa_destino_origem: Option<String>,
    pub pagamento: Option<String>,
    pub data_emissao: Option<NaiveDate>,
    pub data_vencimento: Option<NaiveDate>,
    pub data_baixa: Option<NaiveDate>,
    pub observacoes: Option<String>,
}

const TAB_PRINCIPAL: &str = "Principal";
const TAB_FINANCEIRO: &str = "Financeiro";
const TAB_DATAS: &str = "Datas";
const TAB_OUTROS: &str = "Outros";

impl Record for Conta {
    type Create = ContaCreate;
    type Update = ContaUpdate;

    const TYPE_NAME: &'static str = "Conta";
    const TABLE_NAME: &'static str = "contas";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("tipo_conta", ColumnKind::Enum { members: ContaTipo::MEMBERS })
            .required()
            .tab(TAB_PRINCIPAL),
        ColumnDef::new("situacao", ColumnKind::Enum { members: ContaSituacao::MEMBERS })
            .required()
            .tab(TAB_PRINCIPAL),
        ColumnDef::new("descricao", ColumnKind::Text).tab(TAB_PRINCIPAL),
        ColumnDef::new("numero_conta", ColumnKind::Integer).tab(TAB_PRINCIPAL),
        ColumnDef::new("id_fornecedor", ColumnKind::Integer)
            .tab(TAB_PRINCIPAL)
            .references("cadastros"),
        ColumnDef::new("valor", ColumnKind::Numeric { scale: 2 })
            .required()
            .tab(TAB_FINANCEIRO),
        ColumnDef::new("plano_contas", ColumnKind::Text).tab(TAB_FINANCEIRO),
        ColumnDef::new("caixa_destino_origem", ColumnKind::Text).tab(TAB_FINANCEIRO),
        ColumnDef::new("pagamento", ColumnKind::Text).tab(TAB_FINANCEIRO),
        ColumnDef::new("data_emissao", ColumnKind::Date).tab(TAB_DATAS),
        ColumnDef::new("data_vencimento", ColumnKind::Date).tab(TAB_DATAS),
        ColumnDef::new("data_baixa", ColumnKind::Date).tab(TAB_DATAS),
        ColumnDef::new("observacoes", ColumnKind::Text).tab(TAB_OUTROS),
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
            tipo_conta: input.tipo_conta,
            situacao: input.situacao,
            descricao: input.descricao,
            numero_conta: input.numero_conta,
            id_fornecedor: input.id_fornecedor,
            valor: input.valor,
            plano_contas: input.plano_contas,
            caixa_destino_origem: input.caixa_destino_origem,
            pagamento: input.pagamento,
            data_emissao: input.data_emissao,
            data_vencimento: input.data_vencimento,
            data_baixa: input.data_baixa,
            observacoes: input.observacoes,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [tipo_conta, situacao, valor],
            optional: [
                descricao, numero_conta, id_fornecedor, plano_contas,
                caixa_destino_origem, pagamento, data_emissao, data_vencimento,
                data_baixa, observacoes,
            ]);
        self.atualizado_em = Some(now);
    }
}
