//! Produto, a sellable item with fiscal classification and dimensions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gestao_core::{ColumnDef, ColumnKind, Record, RecordId, TenantId};

use crate::enums::{ProdutoOrigem, ProdutoTipo, ProdutoUnidade};
use crate::{default_true, merge_update};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produto {
    pub id: RecordId,
    pub sku: String,
    pub gtin: Option<String>,
    pub descricao: String,
    pub unidade: ProdutoUnidade,
    pub tipo_produto: ProdutoTipo,
    pub url_imagem: Option<String>,
    pub situacao: bool,
    pub id_embalagem: Option<RecordId>,
    pub id_fornecedor: Option<RecordId>,
    pub grupo: Option<String>,
    pub subgrupo1: Option<String>,
    pub subgrupo2: Option<String>,
    pub subgrupo3: Option<String>,
    pub subgrupo4: Option<String>,
    pub subgrupo5: Option<String>,
    pub classificacao_fiscal: Option<String>,
    pub origem: ProdutoOrigem,
    pub ncm: Option<String>,
    pub preco: Option<Decimal>,
    pub custo: Option<Decimal>,
    pub estoque_negativo: bool,
    pub peso: Option<Decimal>,
    pub altura: Option<Decimal>,
    pub largura: Option<Decimal>,
    pub comprimento: Option<Decimal>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: Option<DateTime<Utc>>,
    pub id_empresa: TenantId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProdutoCreate {
    pub sku: String,
    #[serde(default)]
    pub gtin: Option<String>,
    pub descricao: String,
    #[serde(default)]
    pub unidade: ProdutoUnidade,
    #[serde(default)]
    pub tipo_produto: ProdutoTipo,
    #[serde(default)]
    pub url_imagem: Option<String>,
    #[serde(default = "default_true")]
    pub situacao: bool,
    #[serde(default)]
    pub id_embalagem: Option<RecordId>,
    #[serde(default)]
    pub id_fornecedor: Option<RecordId>,
    #[serde(default)]
    pub grupo: Option<String>,
    #[serde(default)]
    pub subgrupo1: Option<String>,
    #[serde(default)]
    pub subgrupo2: Option<String>,
    #[serde(default)]
    pub subgrupo3: Option<String>,
    #[serde(default)]
    pub subgrupo4: Option<String>,
    #[serde(default)]
    pub subgrupo5: Option<String>,
    #[serde(default)]
    pub classificacao_fiscal: Option<String>,
    #[serde(default)]
    pub origem: ProdutoOrigem,
    #[serde(default)]
    pub ncm: Option<String>,
    #[serde(default)]
    pub preco: Option<Decimal>,
    #[serde(default)]
    pub custo: Option<Decimal>,
    #[serde(default)]
    pub estoque_negativo: bool,
    #[serde(default)]
    pub peso: Option<Decimal>,
    #[serde(default)]
    pub altura: Option<Decimal>,
    #[serde(default)]
    pub largura: Option<Decimal>,
    #[serde(default)]
    pub comprimento: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProdutoUpdate {
    pub sku: Option<String>,
    pub gtin: Option<String>,
    pub descricao: Option<String>,
    pub unidade: Option<ProdutoUnidade>,
    pub tipo_produto: Option<ProdutoTipo>,
    pub url_imagem: Option<String>,
    pub situacao: Option<bool>,
    pub id_embalagem: Option<RecordId>,
    pub id_fornecedor: Option<RecordId>,
    pub grupo: Option<String>,
    pub subgrupo1: Option<String>,
    pub subgrupo2: Option<String>,
    pub subgrupo3: Option<String>,
    pub subgrupo4: Option<String>,
    pub subgrupo5: Option<String>,
    pub classificacao_fiscal: Option<String>,
    pub origem: Option<ProdutoOrigem>,
    pub ncm: Option<String>,
    pub preco: Option<Decimal>,
    pub custo: Option<Decimal>,
    pub estoque_negativo: Option<bool>,
    pub peso: Option<Decimal>,
    pub altura: Option<Decimal>,
    pub largura: Option<Decimal>,
    pub comprimento: Option<Decimal>,
}

const TAB_DADOS: &str = "Dados Gerais";
const TAB_CATEGORIA: &str = "Categorização";
const TAB_FISCAL: &str = "Fiscal";
const TAB_VALORES: &str = "Valores e Dimensões";

impl Record for Produto {
    type Create = ProdutoCreate;
    type Update = ProdutoUpdate;

    const TYPE_NAME: &'static str = "Produto";
    const TABLE_NAME: &'static str = "produtos";
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::primary("id"),
        ColumnDef::new("sku", ColumnKind::Text).required().unique().tab(TAB_DADOS),
        ColumnDef::new("gtin", ColumnKind::Text).tab(TAB_DADOS),
        ColumnDef::new("descricao", ColumnKind::Text).required().tab(TAB_DADOS),
        ColumnDef::new("unidade", ColumnKind::Enum { members: ProdutoUnidade::MEMBERS })
            .tab(TAB_DADOS),
        ColumnDef::new("tipo_produto", ColumnKind::Enum { members: ProdutoTipo::MEMBERS })
            .tab(TAB_DADOS),
        ColumnDef::new("url_imagem", ColumnKind::Text).tab(TAB_DADOS),
        ColumnDef::new("situacao", ColumnKind::Boolean).required().tab(TAB_DADOS),
        ColumnDef::new("id_embalagem", ColumnKind::Integer)
            .tab(TAB_DADOS)
            .references("embalagens"),
        ColumnDef::new("id_fornecedor", ColumnKind::Integer)
            .tab(TAB_DADOS)
            .references("cadastros"),
        ColumnDef::new("grupo", ColumnKind::Text).tab(TAB_CATEGORIA),
        ColumnDef::new("subgrupo1", ColumnKind::Text).tab(TAB_CATEGORIA),
        ColumnDef::new("subgrupo2", ColumnKind::Text).tab(TAB_CATEGORIA),
        ColumnDef::new("subgrupo3", ColumnKind::Text).tab(TAB_CATEGORIA),
        ColumnDef::new("subgrupo4", ColumnKind::Text).tab(TAB_CATEGORIA),
        ColumnDef::new("subgrupo5", ColumnKind::Text).tab(TAB_CATEGORIA),
        ColumnDef::new("classificacao_fiscal", ColumnKind::Text).tab(TAB_FISCAL),
        ColumnDef::new("origem", ColumnKind::Enum { members: ProdutoOrigem::MEMBERS })
            .tab(TAB_FISCAL),
        ColumnDef::new("ncm", ColumnKind::Text).mask("ncm").tab(TAB_FISCAL),
        ColumnDef::new("preco", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
        ColumnDef::new("custo", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
        ColumnDef::new("estoque_negativo", ColumnKind::Boolean).tab(TAB_VALORES),
        ColumnDef::new("peso", ColumnKind::Numeric { scale: 3 })
            .mask("decimal:3")
            .tab(TAB_VALORES),
        ColumnDef::new("altura", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
        ColumnDef::new("largura", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
        ColumnDef::new("comprimento", ColumnKind::Numeric { scale: 2 }).tab(TAB_VALORES),
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
            sku: input.sku,
            gtin: input.gtin,
            descricao: input.descricao,
            unidade: input.unidade,
            tipo_produto: input.tipo_produto,
            url_imagem: input.url_imagem,
            situacao: input.situacao,
            id_embalagem: input.id_embalagem,
            id_fornecedor: input.id_fornecedor,
            grupo: input.grupo,
            subgrupo1: input.subgrupo1,
            subgrupo2: input.subgrupo2,
            subgrupo3: input.subgrupo3,
            subgrupo4: input.subgrupo4,
            subgrupo5: input.subgrupo5,
            classificacao_fiscal: input.classificacao_fiscal,
            origem: input.origem,
            ncm: input.ncm,
            preco: input.preco,
            custo: input.custo,
            estoque_negativo: input.estoque_negativo,
            peso: input.peso,
            altura: input.altura,
            largura: input.largura,
            comprimento: input.comprimento,
            criado_em: now,
            atualizado_em: None,
            id_empresa: tenant,
        }
    }

    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>) {
        merge_update!(self, input;
            required: [sku, descricao, unidade, tipo_produto, situacao, origem, estoque_negativo],
            optional: [
                gtin, url_imagem, id_embalagem, id_fornecedor, grupo, subgrupo1,
                subgrupo2, subgrupo3, subgrupo4, subgrupo5, classificacao_fiscal,
                ncm, preco, custo, peso, altura, largura, comprimento,
            ]);
        self.atualizado_em = Some(now);
    }
}
