//! Cadastro, the contact super-record: cliente, fornecedor, transportadora or
//! vendedor, discriminated by `tipo_cadastro`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::{CadastroIndicadorIe, CadastroTipoCadastro, CadastroTipoPessoa};
use crate::{default_true, merge_update};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cadastro {
    pub id: RecordId,
    pub cpf_cnpj: String,
    pub nome_razao: String,
    pub fantasia: Option<String>,
    pub tipo_pessoa: CadastroTipoPessoa,
    pub tipo_cadastro: CadastroTipoCadastro,
    pub indicador_ie: Option<CadastroIndicadorIe>,
    pub inscricao_estadual: Option<String>,
    pub situacao: bool,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub celular: Option<String>,
    pub cep: String,
    pub estado: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

fn default_indicador_ie() -> Option<CadastroIndicadorIe> {
    Some(CadastroIndicadorIe::NaoContribuinte)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CadastroCreate {
    pub cpf_cnpj: String,
    pub nome_razao: String,
    #[serde(default)]
    pub fantasia: Option<String>,
    #[serde(default)]
    pub tipo_pessoa: CadastroTipoPessoa,
    #[serde(default)]
    pub tipo_cadastro: CadastroTipoCadastro,
    #[serde(default = "default_indicador_ie")]
    pub indicador_ie: Option<CadastroIndicadorIe>,
    #[serde(default)]
    pub inscricao_estadual: Option<String>,
    #[serde(default = "default_true")]
    pub situacao: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub celular: Option<String>,
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
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CadastroUpdate {
    pub cpf_cnpj: Option<String>,
    pub nome_razao: Option<String>,
    pub fantasia: Option<String>,
    pub tipo_pessoa: Option<CadastroTipoPessoa>,
    pub tipo_cadastro: Option<CadastroTipoCadastro>,
    pub indicador_ie: Option<CadastroIndicadorIe>,
    pub inscricao_estadual: Option<String>,
    pub situacao: Option<bool>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub celular: Option<String>,
    pub cep: Option<String>,
    pub estado: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
}

const TAB_DADOS: &str = "Dados Gerais";
const TAB_CONTATO: &str = "Contato";
const TAB_ENDERECO: &str = "Endereço";

impl Record for Cadastro {
    type Create = CadastroCreate;
    type Update = CadastroUpdate;

    const TYPE_NAME: &'static str = "Cadastro";
    const TABLE_NAME: &'static str = "cadastros";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("cpf_cnpj", ColumnKind::Text)
            .required()
            .mask("cnpj_cpf")
            .tab(TAB_DADOS),
        ColumnDef::new("nome_razao", ColumnKind::Text).required().tab(TAB_DADOS),
        ColumnDef::new("fantasia", ColumnKind::Text).tab(TAB_DADOS),
        ColumnDef::new("tipo_pessoa", ColumnKind::Enum { members: CadastroTipoPessoa::MEMBERS })
            .required()
            .tab(TAB_DADOS),
        ColumnDef::new("tipo_cadastro", ColumnKind::Enum { members: CadastroTipoCadastro::MEMBERS })
            .required()
            .tab(TAB_DADOS),
        ColumnDef::new("indicador_ie", ColumnKind::Enum { members: CadastroIndicadorIe::MEMBERS })
            .tab(TAB_DADOS),
        ColumnDef::new("inscricao_estadual", ColumnKind::Text).tab(TAB_DADOS),
        ColumnDef::new("situacao", ColumnKind::Boolean).required().tab(TAB_DADOS),
        ColumnDef::new("email", ColumnKind::Text).tab(TAB_CONTATO),
        ColumnDef::new("telefone", ColumnKind::Text).mask("phone").tab(TAB_CONTATO),
        ColumnDef::new("celular", ColumnKind::Text).mask("phone").tab(TAB_CONTATO),
        ColumnDef::new("cep", ColumnKind::Text).required().mask("cep").tab(TAB_ENDERECO),
        ColumnDef::new("estado", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("cidade", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("bairro", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("logradouro", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("numero", ColumnKind::Text).tab(TAB_ENDERECO),
        ColumnDef::new("complemento", ColumnKind::Text).tab(TAB_ENDERECO),
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
            cpf_cnpj: input.cpf_cnpj,
            nome_razao: input.nome_razao,
            fantasia: input.fantasia,
            tipo_pessoa: input.tipo_pessoa,
            tipo_cadastro: input.tipo_cadastro,
            indicador_ie: input.indicador_ie,
            inscricao_estadual: input.inscricao_estadual,
            situacao: input.situacao,
            email: input.email,
            telefone: input.telefone,
            celular: input.celular,
            cep: input.cep,
            estado: input.estado,
            cidade: input.cidade,
            bairro: input.bairro,
            logradouro: input.logradouro,
            numero: input.numero,
            complemento: input.complemento,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [cpf_cnpj, nome_razao, tipo_pessoa, tipo_cadastro, situacao, cep],
            optional: [
                fantasia, indicador_ie, inscricao_estadual, email, telefone,
                celular, estado, cidade, bairro, logradouro, numero, complemento,
            ]);
        self.atualizado_em = Some(now);
    }
}
