//! Estoque, one stock lot of a product.
//!
//! The table name is singular; the route name still resolves because the
//! inflection rules map "estoques" and "estoque" to the same type name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::EstoqueSituacao;
use crate::merge_update;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estoque {
    pub id: RecordId,
    pub id_produto: RecordId,
    pub lote: Option<String>,
    pub quantidade: i64,
    pub situacao: EstoqueSituacao,
    pub deposito: Option<String>,
    pub rua: Option<String>,
    pub nivel: Option<String>,
    pub cor: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstoqueCreate {
    pub id_produto: RecordId,
    #[serde(default)]
    pub lote: Option<String>,
    pub quantidade: i64,
    #[serde(default)]
    pub situacao: EstoqueSituacao,
    #[serde(default)]
    pub deposito: Option<String>,
    #[serde(default)]
    pub rua: Option<String>,
    #[serde(default)]
    pub nivel: Option<String>,
    #[serde(default)]
    pub cor: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstoqueUpdate {
    pub id_produto: Option<RecordId>,
    pub lote: Option<String>,
    pub quantidade: Option<i64>,
    pub situacao: Option<EstoqueSituacao>,
    pub deposito: Option<String>,
    pub rua: Option<String>,
    pub nivel: Option<String>,
    pub cor: Option<String>,
}

const TAB_PRINCIPAL: &str = "Principal";
const TAB_LOCAL: &str = "Localização";

impl Record for Estoque {
    type Create = EstoqueCreate;
    type Update = EstoqueUpdate;

    const TYPE_NAME: &'static str = "Estoque";
    const TABLE_NAME: &'static str = "estoque";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("id_produto", ColumnKind::Integer)
            .required()
            .tab(TAB_PRINCIPAL)
            .references("produtos"),
        ColumnDef::new("lote", ColumnKind::Text).tab(TAB_PRINCIPAL),
        ColumnDef::new("quantidade", ColumnKind::Integer).required().tab(TAB_PRINCIPAL),
        ColumnDef::new("situacao", ColumnKind::Enum { members: EstoqueSituacao::MEMBERS })
            .required()
            .tab(TAB_PRINCIPAL),
        ColumnDef::new("deposito", ColumnKind::Text).tab(TAB_LOCAL),
        ColumnDef::new("rua", ColumnKind::Text).tab(TAB_LOCAL),
        ColumnDef::new("nivel", ColumnKind::Text).tab(TAB_LOCAL),
        ColumnDef::new("cor", ColumnKind::Text).tab(TAB_LOCAL),
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
            id_produto: input.id_produto,
            lote: input.lote,
            quantidade: input.quantidade,
            situacao: input.situacao,
            deposito: input.deposito,
            rua: input.rua,
            nivel: input.nivel,
            cor: input.cor,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [id_produto, quantidade, situacao],
            optional: [lote, deposito, rua, nivel, cor]);
        self.atualizado_em = Some(now);
    }
}
