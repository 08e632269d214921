//! Static model registry.

use std::collections::HashMap;
use std::sync::Arc;

use gestao_core::{ColumnDef, Record};

use crate::handler::EntityHandler;
use crate::inflect;

/// Display-field candidates, in priority order. The first one present among
/// a type's columns names the record in pickers and FK labels.
const PREFERRED_DISPLAY_FIELDS: &[&str] = &[
    "nome_razao",
    "fantasia",
    "nome",
    "descricao",
    "razao",
    "sku",
    "email",
];

/// One registered record type with its precomputed route metadata and its
/// CRUD handler.
pub struct RegistryEntry {
    pub type_name: &'static str,
    pub table_name: &'static str,
    /// Singular display name, e.g. "Produto".
    pub display_name: String,
    pub display_name_singular: String,
    pub display_name_plural: String,
    /// Column naming the record in pickers; "id" when nothing better exists.
    pub display_field: &'static str,
    pub columns: &'static [ColumnDef],
    pub handler: Arc<dyn EntityHandler>,
}

/// Route-name to entry lookup, built once at startup.
pub struct Registry {
    by_type: HashMap<&'static str, Arc<RegistryEntry>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder { by_type: HashMap::new() }
    }

    /// Resolve a route model name ("produtos", "tributacoes") to its entry.
    ///
    /// The singularized, capitalized form is probed first; the capitalized
    /// plural second, so types registered under a plural name still resolve.
    pub fn resolve(&self, model_name: &str) -> Option<&Arc<RegistryEntry>> {
        let primary = inflect::capitalize(&inflect::singularize(model_name));
        if let Some(entry) = self.by_type.get(primary.as_str()) {
            return Some(entry);
        }
        let fallback = inflect::capitalize(model_name);
        if fallback != primary {
            return self.by_type.get(fallback.as_str());
        }
        None
    }

    pub fn entries(&self) -> impl Iterator<Item = &Arc<RegistryEntry>> {
        self.by_type.values()
    }
}

pub struct RegistryBuilder {
    by_type: HashMap<&'static str, Arc<RegistryEntry>>,
}

impl RegistryBuilder {
    /// Register a record type with its handler. Registering the same type
    /// twice replaces the earlier entry.
    pub fn register<T: Record>(mut self, handler: Arc<dyn EntityHandler>) -> Self {
        let display_field = PREFERRED_DISPLAY_FIELDS
            .iter()
            .find(|f| T::COLUMNS.iter().any(|c| c.name == **f))
            .copied()
            .unwrap_or("id");

        let entry = RegistryEntry {
            type_name: T::TYPE_NAME,
            table_name: T::TABLE_NAME,
            display_name: inflect::display_name_singular(T::TABLE_NAME),
            display_name_singular: inflect::display_name_singular(T::TABLE_NAME),
            display_name_plural: inflect::display_name_plural(T::TABLE_NAME),
            display_field,
            columns: T::COLUMNS,
            handler,
        };
        if self.by_type.insert(T::TYPE_NAME, Arc::new(entry)).is_some() {
            tracing::warn!(type_name = T::TYPE_NAME, "model registered twice, replacing");
        }
        self
    }

    pub fn build(self) -> Registry {
        Registry { by_type: self.by_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::GenericHandler;
    use gestao_domain::{Cadastro, Conta, Empresa, Estoque, Pedido, Produto, Tributacao, Usuario};
    use gestao_store::Table;

    fn handler<T: Record>() -> Arc<dyn EntityHandler> {
        Arc::new(GenericHandler::<T, _>::new(Arc::new(Table::<T>::new())))
    }

    fn registry() -> Registry {
        Registry::builder()
            .register::<Empresa>(handler::<Empresa>())
            .register::<Usuario>(handler::<Usuario>())
            .register::<Cadastro>(handler::<Cadastro>())
            .register::<Produto>(handler::<Produto>())
            .register::<Conta>(handler::<Conta>())
            .register::<Estoque>(handler::<Estoque>())
            .register::<Pedido>(handler::<Pedido>())
            .register::<Tributacao>(handler::<Tributacao>())
            .build()
    }

    #[test]
    fn resolves_plural_route_names() {
        let reg = registry();
        assert_eq!(reg.resolve("produtos").unwrap().type_name, "Produto");
        assert_eq!(reg.resolve("usuarios").unwrap().type_name, "Usuario");
        assert_eq!(reg.resolve("empresas").unwrap().type_name, "Empresa");
        assert_eq!(reg.resolve("tributacoes").unwrap().type_name, "Tributacao");
    }

    #[test]
    fn resolves_singular_table_names_too() {
        let reg = registry();
        assert_eq!(reg.resolve("estoque").unwrap().type_name, "Estoque");
        assert_eq!(reg.resolve("estoques").unwrap().type_name, "Estoque");
    }

    #[test]
    fn unknown_model_is_none() {
        assert!(registry().resolve("notas_fiscais").is_none());
    }

    #[test]
    fn display_field_priority() {
        let reg = registry();
        assert_eq!(reg.resolve("cadastros").unwrap().display_field, "nome_razao");
        assert_eq!(reg.resolve("empresas").unwrap().display_field, "fantasia");
        assert_eq!(reg.resolve("usuarios").unwrap().display_field, "nome");
        assert_eq!(reg.resolve("produtos").unwrap().display_field, "descricao");
        assert_eq!(reg.resolve("pedidos").unwrap().display_field, "id");
        assert_eq!(reg.resolve("estoque").unwrap().display_field, "id");
    }

    #[test]
    fn display_names_are_precomputed() {
        let reg = registry();
        let produtos = reg.resolve("produtos").unwrap();
        assert_eq!(produtos.display_name, "Produto");
        assert_eq!(produtos.display_name_plural, "Produtos");

        let regras = reg.resolve("tributacoes").unwrap();
        assert_eq!(regras.display_name_singular, "Regras tributaria");
    }
}
