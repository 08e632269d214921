//! Field-metadata introspection.
//!
//! Turns a registered type's column table into the form description the
//! frontend renders: labels, tabs, input kinds, select options, format
//! masks and foreign-key linkage.

use serde::Serialize;

use gestao_core::{ColumnDef, ColumnKind, DomainResult};

use crate::inflect;
use crate::registry::Registry;

/// Columns never exposed in form metadata.
const SKIPPED_FIELDS: &[&str] = &["id", "id_empresa", "criado_em", "atualizado_em"];

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldMetadata {
    pub name: String,
    pub label: String,
    /// Input kind; absent for foreign keys, which render as async pickers.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub required: bool,
    pub options: Option<Vec<SelectOption>>,
    pub format_mask: Option<String>,
    pub tab: Option<String>,
    /// Route model name of the referenced type, e.g. "cadastros".
    pub foreign_key_model: Option<String>,
    /// Display field of the referenced type, "id" when it has none.
    pub foreign_key_label_field: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub model_name: String,
    pub display_name: String,
    pub display_field: Option<String>,
    pub fields: Vec<FieldMetadata>,
}

/// Build the form metadata for a route model name.
///
/// Fails with `NotFound` for unknown names; structural problems cannot occur
/// because the column tables are authored, not reflected.
pub fn model_metadata(registry: &Registry, model_name: &str) -> DomainResult<ModelMetadata> {
    let entry = registry.resolve(model_name).ok_or_else(gestao_core::DomainError::not_found)?;

    let fields = entry
        .columns
        .iter()
        .filter(|col| !SKIPPED_FIELDS.contains(&col.name))
        .map(|col| field_metadata(registry, col))
        .collect();

    Ok(ModelMetadata {
        model_name: model_name.to_string(),
        display_name: entry.display_name.clone(),
        display_field: Some(entry.display_field.to_string()),
        fields,
    })
}

fn field_metadata(registry: &Registry, col: &ColumnDef) -> FieldMetadata {
    let foreign_key_model = col.references.map(str::to_string);
    let foreign_key_label_field = col.references.map(|table| {
        registry
            .resolve(table)
            .map(|fk| fk.display_field.to_string())
            .unwrap_or_else(|| "id".to_string())
    });

    // Foreign keys render as async pickers, so they carry no input kind.
    let (kind, options) = if foreign_key_model.is_some() {
        (None, None)
    } else {
        field_kind(col)
    };

    FieldMetadata {
        name: col.name.to_string(),
        label: col.label.map(str::to_string).unwrap_or_else(|| derive_label(col.name)),
        kind,
        required: !col.nullable && !col.primary_key,
        options,
        format_mask: col
            .format_mask
            .map(str::to_string)
            .or_else(|| derive_mask(col.name, &col.kind)),
        tab: Some(col.tab.unwrap_or("Dados Gerais").to_string()),
        foreign_key_model,
        foreign_key_label_field,
    }
}

fn field_kind(col: &ColumnDef) -> (Option<String>, Option<Vec<SelectOption>>) {
    let kind = match &col.kind {
        ColumnKind::Json if col.name == "regras" => "rule_builder",
        ColumnKind::Json if col.name == "itens" => "order_items",
        ColumnKind::Json => "text",
        ColumnKind::Enum { members } => {
            let options = members
                .iter()
                .map(|m| SelectOption {
                    label: inflect::capitalize(m.name),
                    value: m.value.to_string(),
                })
                .collect();
            return (Some("select".to_string()), Some(options));
        }
        ColumnKind::Integer | ColumnKind::Numeric { .. } => "number",
        ColumnKind::Boolean => "boolean",
        ColumnKind::DateTime => "datetime",
        ColumnKind::Date => "date",
        ColumnKind::Text if col.name.contains("email") => "email",
        ColumnKind::Text => "text",
    };
    (Some(kind.to_string()), None)
}

/// Human label from a column name: `id_` / `_id` affixes dropped,
/// underscores to spaces, each word capitalized.
fn derive_label(name: &str) -> String {
    let base = name
        .strip_prefix("id_")
        .or_else(|| name.strip_suffix("_id"))
        .unwrap_or(name);
    base.split('_')
        .map(inflect::capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn derive_mask(name: &str, kind: &ColumnKind) -> Option<String> {
    let mask = match kind {
        ColumnKind::DateTime => "datetime",
        ColumnKind::Date => "date",
        _ if name.contains("cnpj") => "cnpj",
        _ if name.contains("cep") => "cep",
        _ if name.contains("telefone") || name.contains("celular") => "phone",
        ColumnKind::Numeric { scale: 2 } => "currency",
        ColumnKind::Numeric { scale: 3 } => "decimal:3",
        _ if name.ends_with("aliquota") || name.ends_with("perc") => "percent:2",
        _ => return None,
    };
    Some(mask.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::handler::GenericHandler;
    use gestao_domain::{Cadastro, Embalagem, Empresa, Pedido, Produto, Usuario};
    use gestao_domain::enums::{CadastroIndicadorIe, UsuarioPerfil};
    use gestao_store::Table;

    fn handler<T: gestao_core::Record>() -> Arc<dyn crate::handler::EntityHandler> {
        Arc::new(GenericHandler::<T, _>::new(Arc::new(Table::<T>::new())))
    }

    fn registry() -> Registry {
        Registry::builder()
            .register::<Empresa>(handler::<Empresa>())
            .register::<Usuario>(handler::<Usuario>())
            .register::<Cadastro>(handler::<Cadastro>())
            .register::<Produto>(handler::<Produto>())
            .register::<Embalagem>(handler::<Embalagem>())
            .register::<Pedido>(handler::<Pedido>())
            .build()
    }

    fn field<'a>(meta: &'a ModelMetadata, name: &str) -> &'a FieldMetadata {
        meta.fields.iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn unknown_model_is_not_found() {
        assert!(model_metadata(&registry(), "nope").is_err());
    }

    #[test]
    fn internal_columns_are_skipped() {
        let meta = model_metadata(&registry(), "produtos").unwrap();
        for hidden in ["id", "id_empresa", "criado_em", "atualizado_em"] {
            assert!(meta.fields.iter().all(|f| f.name != hidden), "{hidden} leaked");
        }
    }

    #[test]
    fn produtos_metadata_headline() {
        let meta = model_metadata(&registry(), "produtos").unwrap();
        assert_eq!(meta.model_name, "produtos");
        assert_eq!(meta.display_name, "Produto");
        assert_eq!(meta.display_field.as_deref(), Some("descricao"));

        let sku = field(&meta, "sku");
        assert_eq!(sku.kind.as_deref(), Some("text"));
        assert!(sku.required);
        assert_eq!(sku.tab.as_deref(), Some("Dados Gerais"));
    }

    #[test]
    fn foreign_keys_carry_linkage_and_no_kind() {
        let meta = model_metadata(&registry(), "produtos").unwrap();
        let fornecedor = field(&meta, "id_fornecedor");
        assert_eq!(fornecedor.kind, None);
        assert_eq!(fornecedor.foreign_key_model.as_deref(), Some("cadastros"));
        assert_eq!(fornecedor.foreign_key_label_field.as_deref(), Some("nome_razao"));
        assert_eq!(fornecedor.label, "Fornecedor");

        let embalagem = field(&meta, "id_embalagem");
        assert_eq!(embalagem.foreign_key_label_field.as_deref(), Some("descricao"));
    }

    #[test]
    fn enum_columns_become_selects_with_one_option_per_member() {
        let meta = model_metadata(&registry(), "usuarios").unwrap();
        let perfil = field(&meta, "perfil");
        assert_eq!(perfil.kind.as_deref(), Some("select"));
        let options = perfil.options.as_ref().unwrap();
        assert_eq!(options.len(), UsuarioPerfil::MEMBERS.len());
        assert!(options.iter().any(|o| o.value == "vendedor"));

        let meta = model_metadata(&registry(), "cadastros").unwrap();
        let ie = field(&meta, "indicador_ie");
        assert_eq!(ie.options.as_ref().unwrap().len(), CadastroIndicadorIe::MEMBERS.len());
    }

    #[test]
    fn masks_explicit_and_derived() {
        let reg = registry();
        let empresas = model_metadata(&reg, "empresas").unwrap();
        assert_eq!(field(&empresas, "cnpj").format_mask.as_deref(), Some("cnpj"));
        assert_eq!(field(&empresas, "cep").format_mask.as_deref(), Some("cep"));

        let produtos = model_metadata(&reg, "produtos").unwrap();
        assert_eq!(field(&produtos, "preco").format_mask.as_deref(), Some("currency"));
        assert_eq!(field(&produtos, "peso").format_mask.as_deref(), Some("decimal:3"));

        let pedidos = model_metadata(&reg, "pedidos").unwrap();
        assert_eq!(
            field(&pedidos, "icms_aliquota").format_mask.as_deref(),
            Some("percent:2")
        );
        assert_eq!(field(&pedidos, "data_emissao").format_mask.as_deref(), Some("date"));
    }

    #[test]
    fn labels_derived_and_overridden() {
        let reg = registry();
        let cadastros = model_metadata(&reg, "cadastros").unwrap();
        assert_eq!(field(&cadastros, "nome_razao").label, "Nome Razao");

        let empresas = model_metadata(&reg, "empresas").unwrap();
        assert_eq!(field(&empresas, "url_logo").label, "URL do Logo");
    }

    #[test]
    fn json_columns_get_custom_widget_kinds() {
        let reg = registry();
        let embalagens = model_metadata(&reg, "embalagens").unwrap();
        assert_eq!(field(&embalagens, "regras").kind.as_deref(), Some("rule_builder"));

        let pedidos = model_metadata(&reg, "pedidos").unwrap();
        assert_eq!(field(&pedidos, "itens").kind.as_deref(), Some("order_items"));
    }

    #[test]
    fn email_columns_are_email_inputs_and_senha_stays_visible() {
        let meta = model_metadata(&registry(), "usuarios").unwrap();
        assert_eq!(field(&meta, "email").kind.as_deref(), Some("email"));
        assert!(meta.fields.iter().any(|f| f.name == "senha"));
    }

    #[test]
    fn missing_tab_defaults_to_dados_gerais() {
        let meta = model_metadata(&registry(), "produtos").unwrap();
        assert!(meta.fields.iter().all(|f| f.tab.is_some()));
    }
}
