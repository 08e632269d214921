//! Empresa, the tenant record. Every other record is scoped to one empresa.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::{EmpresaCrt, EmpresaEmissao};
use crate::{default_true, merge_update};

/// Tenant record.
///
/// Its tenant reference is its own id: an empresa is visible only to sessions
/// acting under that same empresa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empresa {
    pub id: RecordId,
    pub cnpj: String,
    pub razao: String,
    pub fantasia: Option<String>,
    pub url_logo: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub telefone: Option<String>,
    pub cep: String,
    pub estado: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cnae: Option<String>,
    pub crt: EmpresaCrt,
    pub emissao: EmpresaEmissao,
    pub situacao: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmpresaCreate {
    pub cnpj: String,
    pub razao: String,
    #[serde(default)]
    pub fantasia: Option<String>,
    #[serde(default)]
    pub url_logo: Option<String>,
    #[serde(default)]
    pub inscricao_estadual: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    pub cep: String,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub cnae: Option<String>,
    #[serde(default)]
    pub crt: EmpresaCrt,
    #[serde(default)]
    pub emissao: EmpresaEmissao,
    #[serde(default = "default_true")]
    pub situacao: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmpresaUpdate {
    pub cnpj: Option<String>,
    pub razao: Option<String>,
    pub fantasia: Option<String>,
    pub url_logo: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub telefone: Option<String>,
    pub cep: Option<String>,
    pub estado: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cnae: Option<String>,
    pub crt: Option<EmpresaCrt>,
    pub emissao: Option<EmpresaEmissao>,
    pub situacao: Option<bool>,
}

const TAB_DADOS: &str = "Dados Gerais";
const TAB_ENDERECO: &str = "Endereço";
const TAB_CONFIG: &str = "Configurações";

impl Record for Empresa {
    type Create = EmpresaCreate;
    type Update = EmpresaUpdate;

    const TYPE_NAME: &'static str = "Empresa";
    const TABLE_NAME: &'static str = "empresas";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("cnpj", ColumnKind::Text)
            .required()
            .unique()
            .mask("cnpj")
            .tab(TAB_DADOS),
        ColumnDef::new("razao", ColumnKind::Text).required().tab(TAB_DADOS),
        ColumnDef::new("fantasia", ColumnKind::Text).tab(TAB_DADOS),
        ColumnDef::new("url_logo", ColumnKind::Text).label("URL do Logo").tab(TAB_DADOS),
        ColumnDef::new("inscricao_estadual", ColumnKind::Text).tab(TAB_DADOS),
        ColumnDef::new("telefone", ColumnKind::Text).mask("phone").tab(TAB_DADOS),
        ColumnDef::new("cep", ColumnKind::Text).required().mask("cep").tab(TAB_ENDERECO),
        ColumnDef::new("estado", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("cidade", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("bairro", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("logradouro", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("numero", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("complemento", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("cnae", ColumnKind::Text).tab(TAB_CONFIG),
        ColumnDef::new("crt", ColumnKind::Enum { members: EmpresaCrt::MEMBERS })
            .required()
            .tab(TAB_CONFIG),
        ColumnDef::new("emissao", ColumnKind::Enum { members: EmpresaEmissao::MEMBERS })
            .required()
            .tab(TAB_CONFIG),
        ColumnDef::new("situacao", ColumnKind::Boolean).required().tab(TAB_CONFIG),
        ColumnDef::new("criado_em", ColumnKind::DateTime),
        ColumnDef::new("atualizado_em", ColumnKind::DateTime),
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn tenant_id(&self) -> TenantId {
        self.id.into()
    }

    fn from_create(input: Self::Create, _tenant: TenantId, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            cnpj: input.cnpj,
            razao: input.razao,
            fantasia: input.fantasia,
            url_logo: input.url_logo,
            inscricao_estadual: input.inscricao_estadual,
            telefone: input.telefone,
            cep: input.cep,
            estado: input.estado,
            cidade: input.cidade,
            bairro: input.bairro,
            logradouro: input.logradouro,
            numero: input.numero,
            complemento: input.complemento,
            cnae: input.cnae,
            crt: input.crt,
            emissao: input.emissao,
            situacao: input.situacao,
            criado_em: now,
            atualizado_em: None,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [cnpj, razao, cep, crt, emissao, situacao],
            optional: [
                fantasia, url_logo, inscricao_estadual, telefone, estado,
                cidade, bairro, logradouro, numero, complemento, cnae,
            ]);
        self.atualizado_em = Some(now);
    }
}
