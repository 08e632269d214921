//! Tributacao, a tax rule keyed by emitter regime, operation, client type,
//! destination and NCM.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::{
    RegraLocalizacaoDestino, RegraRegimeEmitente, RegraTipoCliente, RegraTipoOperacao,
};
use crate::{default_true, merge_update};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tributacao {
    pub id: RecordId,
    pub descricao: Option<String>,
    pub prioridade: i64,
    pub situacao: bool,
    pub regime_emitente: Option<RegraRegimeEmitente>,
    pub tipo_operacao: Option<RegraTipoOperacao>,
    pub tipo_cliente: Option<RegraTipoCliente>,
    pub localizacao_destino: Option<RegraLocalizacaoDestino>,
    pub origem_produto: Option<String>,
    pub ncm_chave: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

fn default_prioridade() -> i64 {
    10
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TributacaoCreate {
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default = "default_prioridade")]
    pub prioridade: i64,
    #[serde(default = "default_true")]
    pub situacao: bool,
    #[serde(default)]
    pub regime_emitente: Option<RegraRegimeEmitente>,
    #[serde(default)]
    pub tipo_operacao: Option<RegraTipoOperacao>,
    #[serde(default)]
    pub tipo_cliente: Option<RegraTipoCliente>,
    #[serde(default)]
    pub localizacao_destino: Option<RegraLocalizacaoDestino>,
    #[serde(default)]
    pub origem_produto: Option<String>,
    #[serde(default)]
    pub ncm_chave: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TributacaoUpdate {
    pub descricao: Option<String>,
    pub prioridade: Option<i64>,
    pub situacao: Option<bool>,
    pub regime_emitente: Option<RegraRegimeEmitente>,
    pub tipo_operacao: Option<RegraTipoOperacao>,
    pub tipo_cliente: Option<RegraTipoCliente>,
    pub localizacao_destino: Option<RegraLocalizacaoDestino>,
    pub origem_produto: Option<String>,
    pub ncm_chave: Option<String>,
}

const TAB_CONFIG: &str = "Configuração";
const TAB_REGRAS: &str = "Regras (Chaves)";

impl Record for Tributacao {
    type Create = TributacaoCreate;
    type Update = TributacaoUpdate;

    const TYPE_NAME: &'static str = "Tributacao";
    const TABLE_NAME: &'static str = "regras_tributarias";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("descricao", ColumnKind::Text).tab(TAB_CONFIG),
        ColumnDef::new("prioridade", ColumnKind::Integer).tab(TAB_CONFIG),
        ColumnDef::new("situacao", ColumnKind::Boolean).required().tab(TAB_CONFIG),
        ColumnDef::new("regime_emitente", ColumnKind::Enum { members: RegraRegimeEmitente::MEMBERS })
            .tab(TAB_REGRAS),
        ColumnDef::new("tipo_operacao", ColumnKind::Enum { members: RegraTipoOperacao::MEMBERS })
            .tab(TAB_REGRAS),
        ColumnDef::new("tipo_cliente", ColumnKind::Enum { members: RegraTipoCliente::MEMBERS })
            .tab(TAB_REGRAS),
        ColumnDef::new(
            "localizacao_destino",
            ColumnKind::Enum { members: RegraLocalizacaoDestino::MEMBERS },
        )
        .tab(TAB_REGRAS),
        ColumnDef::new("origem_produto", ColumnKind::Text).tab(TAB_REGRAS),
        ColumnDef::new("ncm_chave", ColumnKind::Text).tab(TAB_REGRAS),
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
            descricao: input.descricao,
            prioridade: input.prioridade,
            situacao: input.situacao,
            regime_emitente: input.regime_emitente,
            tipo_operacao: input.tipo_operacao,
            tipo_cliente: input.tipo_cliente,
            localizacao_destino: input.localizacao_destino,
            origem_produto: input.origem_produto,
            ncm_chave: input.ncm_chave,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [prioridade, situacao],
            optional: [
                descricao, regime_emitente, tipo_operacao, tipo_cliente,
                localizacao_destino, origem_produto, ncm_chave,
            ]);
        self.atualizado_em = Some(now);
    }
}
