//! Embalagem, a packaging definition with free-form packing rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::{default_true, merge_update};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embalagem {
    pub id: RecordId,
    pub descricao: String,
    /// Packing rules kept as free JSON so the rule builder can evolve
    /// without schema churn.
    pub regras: Option<serde_json::Value>,
    pub situacao: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbalagemCreate {
    pub descricao: String,
    #[serde(default)]
    pub regras: Option<serde_json::Value>,
    #[serde(default = "default_true")]
    pub situacao: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbalagemUpdate {
    pub descricao: Option<String>,
    pub regras: Option<serde_json::Value>,
    pub situacao: Option<bool>,
}

impl Record for Embalagem {
    type Create = EmbalagemCreate;
    type Update = EmbalagemUpdate;

    const TYPE_NAME: &'static str = "Embalagem";
    const TABLE_NAME: &'static str = "embalagens";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("descricao", ColumnKind::Text).required().tab("Dados Gerais"),
        ColumnDef::new("regras", ColumnKind::Json).tab("Regras de Empacotamento"),
        ColumnDef::new("situacao", ColumnKind::Boolean).required().tab("Dados Gerais"),
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
            regras: input.regras,
            situacao: input.situacao,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [descricao, situacao],
            optional: [regras]);
        self.atualizado_em = Some(now);
    }
}
