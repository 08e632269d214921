//! Usuario, the system user. The credential-bearing record type.
//!
//! The `senha` attribute holds the password hash and is never serialized into
//! the read schema. Hashing happens in the specialized CRUD handler; this
//! module only stores what it is given.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::UsuarioPerfil;
use crate::{default_true, merge_update};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: RecordId,
    pub nome: String,
    pub email: String,
    /// Password hash. Excluded from the read schema.
    #[serde(skip_serializing, default)]
    pub senha: String,
    pub perfil: UsuarioPerfil,
    pub situacao: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioCreate {
    pub nome: String,
    pub email: String,
    /// Plain password on input; replaced by its hash before `from_create`.
    pub senha: String,
    #[serde(default)]
    pub perfil: UsuarioPerfil,
    #[serde(default = "default_true")]
    pub situacao: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsuarioUpdate {
    pub nome: Option<String>,
    pub email: Option<String>,
    /// Plain password on input; consumed by the specialized handler.
    pub senha: Option<String>,
    pub perfil: Option<UsuarioPerfil>,
    pub situacao: Option<bool>,
}

const TAB_DADOS: &str = "Dados Gerais";

impl Record for Usuario {
    type Create = UsuarioCreate;
    type Update = UsuarioUpdate;

    const TYPE_NAME: &'static str = "Usuario";
    const TABLE_NAME: &'static str = "usuarios";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("nome", ColumnKind::Text).required().tab(TAB_DADOS),
        ColumnDef::new("email", ColumnKind::Text).required().unique().tab(TAB_DADOS),
        ColumnDef::new("senha", ColumnKind::Text).required().tab(TAB_DADOS),
        ColumnDef::new("perfil", ColumnKind::Enum { members: UsuarioPerfil::MEMBERS })
            .required()
            .tab(TAB_DADOS),
        ColumnDef::new("situacao", ColumnKind::Boolean).required().tab(TAB_DADOS),
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
            nome: input.nome,
            email: input.email,
            senha: input.senha,
            perfil: input.perfil,
            situacao: input.situacao,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        // `senha` is deliberately not merged here: the specialized handler
        // takes it out of the input and stores the hash itself.
        merge_update!(self, input;
            required: [nome, email, perfil, situacao],
            optional: []);
        self.atualizado_em = Some(now);
    }
}
