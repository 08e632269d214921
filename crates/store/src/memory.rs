//! In-memory table backend.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use gestao_core::{DomainError, DomainResult, Record, RecordId, TenantId};

use crate::RecordStore;

/// One in-memory table. Rows keep insertion order; ids are assigned from a
/// monotonically increasing counter, never reused.
pub struct Table<T: Record> {
    rows: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self { rows: RwLock::new(Vec::new()), next_id: AtomicI64::new(1) }
    }

    /// Check the candidate against every other row on each unique column.
    ///
    /// Values are compared through their JSON projection, which makes the
    /// check uniform over column types.
    fn check_unique(rows: &[T], candidate: &T) -> DomainResult<()> {
        let unique_cols: Vec<&str> = T::COLUMNS
            .iter()
            .filter(|c| c.unique)
            .map(|c| c.name)
            .collect();
        if unique_cols.is_empty() {
            return Ok(());
        }

        let candidate_json = serde_json::to_value(candidate)
            .map_err(|e| DomainError::structural(T::TYPE_NAME, e.to_string()))?;
        for row in rows {
            if row.id() == candidate.id() {
                continue;
            }
            let row_json = serde_json::to_value(row)
                .map_err(|e| DomainError::structural(T::TYPE_NAME, e.to_string()))?;
            for col in &unique_cols {
                let a = candidate_json.get(col);
                let b = row_json.get(col);
                if a.is_some() && !a.map(|v| v.is_null()).unwrap_or(true) && a == b {
                    return Err(DomainError::integrity(format!(
                        "duplicate value for unique column '{col}' on {}",
                        T::TABLE_NAME
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> for Table<T> {
    fn get(&self, tenant: TenantId, id: RecordId) -> DomainResult<T> {
        let rows = self.rows.read().map_err(|_| poisoned::<T>())?;
        rows.iter()
            .find(|r| r.id() == id && r.tenant_id() == tenant)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn list(&self, tenant: TenantId) -> Vec<T> {
        match self.rows.read() {
            Ok(rows) => rows.iter().filter(|r| r.tenant_id() == tenant).cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn insert(&self, mut record: T) -> DomainResult<T> {
        let mut rows = self.rows.write().map_err(|_| poisoned::<T>())?;
        record.assign_id(RecordId::new(self.next_id.fetch_add(1, Ordering::Relaxed)));
        Self::check_unique(&rows, &record)?;
        rows.push(record.clone());
        Ok(record)
    }

    fn replace(&self, record: T) -> DomainResult<T> {
        let mut rows = self.rows.write().map_err(|_| poisoned::<T>())?;
        Self::check_unique(&rows, &record)?;
        let slot = rows
            .iter_mut()
            .find(|r| r.id() == record.id() && r.tenant_id() == record.tenant_id())
            .ok_or(DomainError::NotFound)?;
        *slot = record.clone();
        Ok(record)
    }

    fn remove(&self, tenant: TenantId, id: RecordId) -> DomainResult<T> {
        let mut rows = self.rows.write().map_err(|_| poisoned::<T>())?;
        let pos = rows
            .iter()
            .position(|r| r.id() == id && r.tenant_id() == tenant)
            .ok_or(DomainError::NotFound)?;
        Ok(rows.remove(pos))
    }

    fn find(&self, pred: &dyn Fn(&T) -> bool) -> Option<T> {
        let rows = self.rows.read().ok()?;
        rows.iter().find(|r| pred(r)).cloned()
    }
}

fn poisoned<T: Record>() -> DomainError {
    DomainError::structural(T::TYPE_NAME, "table lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use gestao_core::{ColumnDef, ColumnKind};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Widget {
        id: RecordId,
        codigo: String,
        nome: String,
        id_empresa: TenantId,
    }

    #[derive(Debug, Clone, Deserialize)]
    struct WidgetCreate {
        codigo: String,
        nome: String,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    struct WidgetUpdate {
        nome: Option<String>,
    }

    impl Record for Widget {
        type Create = WidgetCreate;
        type Update = WidgetUpdate;

        const TYPE_NAME: &'static str = "Widget";
        const TABLE_NAME: &'static str = "widgets";
        const COLUMNS: &'static [ColumnDef] = &[
            ColumnDef::primary("id"),
            ColumnDef::new("codigo", ColumnKind::Text).required().unique(),
            ColumnDef::new("nome", ColumnKind::Text).required(),
            ColumnDef::new("id_empresa", ColumnKind::Integer).required(),
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

        fn from_create(input: Self::Create, tenant: TenantId, _now: DateTime<Utc>) -> Self {
            Self {
                id: RecordId::UNASSIGNED,
                codigo: input.codigo,
                nome: input.nome,
                id_empresa: tenant,
            }
        }

        fn apply_update(&mut self, input: Self::Update, _now: DateTime<Utc>) {
            if let Some(nome) = input.nome {
                self.nome = nome;
            }
        }
    }

    fn widget(codigo: &str, tenant: i64) -> Widget {
        Widget {
            id: RecordId::UNASSIGNED,
            codigo: codigo.into(),
            nome: format!("widget {codigo}"),
            id_empresa: TenantId::new(tenant),
        }
    }

    #[test]
    fn insert_assigns_sequential_ids_and_keeps_order() {
        let table = Table::new();
        let a = table.insert(widget("a", 1)).unwrap();
        let b = table.insert(widget("b", 1)).unwrap();
        assert_eq!(a.id.value(), 1);
        assert_eq!(b.id.value(), 2);

        let listed = table.list(TenantId::new(1));
        let codes: Vec<&str> = listed.iter().map(|w| w.codigo.as_str()).collect();
        assert_eq!(codes, ["a", "b"]);
    }

    #[test]
    fn list_and_get_are_tenant_scoped() {
        let table = Table::new();
        let mine = table.insert(widget("a", 1)).unwrap();
        table.insert(widget("b", 2)).unwrap();

        assert_eq!(table.list(TenantId::new(1)).len(), 1);
        assert!(table.get(TenantId::new(1), mine.id).is_ok());
        assert!(matches!(
            table.get(TenantId::new(2), mine.id),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn unique_column_rejects_duplicates_across_tenants() {
        let table = Table::new();
        table.insert(widget("a", 1)).unwrap();
        let err = table.insert(widget("a", 2)).unwrap_err();
        assert!(matches!(err, DomainError::Integrity(_)));
    }

    #[test]
    fn replace_skips_own_row_in_unique_check() {
        let table = Table::new();
        let mut row = table.insert(widget("a", 1)).unwrap();
        row.nome = "renamed".into();
        let replaced = table.replace(row).unwrap();
        assert_eq!(replaced.nome, "renamed");
    }

    #[test]
    fn remove_returns_the_row_and_is_tenant_scoped() {
        let table = Table::new();
        let row = table.insert(widget("a", 1)).unwrap();
        assert!(matches!(
            table.remove(TenantId::new(2), row.id),
            Err(DomainError::NotFound)
        ));
        let removed = table.remove(TenantId::new(1), row.id).unwrap();
        assert_eq!(removed.codigo, "a");
        assert!(table.list(TenantId::new(1)).is_empty());
    }

    #[test]
    fn find_searches_across_tenants() {
        let table = Table::new();
        table.insert(widget("a", 1)).unwrap();
        table.insert(widget("b", 2)).unwrap();
        let hit = table.find(&|w: &Widget| w.codigo == "b").unwrap();
        assert_eq!(hit.id_empresa.value(), 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: ids are unique across any insertion sequence, and
            /// every row stays visible to exactly its own tenant.
            #[test]
            fn ids_unique_and_rows_tenant_scoped(
                tenants in proptest::collection::vec(1i64..4, 1..30)
            ) {
                let table = Table::new();
                let mut ids = Vec::new();
                for (i, t) in tenants.iter().enumerate() {
                    let row = table.insert(widget(&format!("w{i}"), *t)).unwrap();
                    ids.push(row.id.value());
                }
                let mut deduped = ids.clone();
                deduped.dedup();
                prop_assert_eq!(deduped.len(), ids.len());

                for t in 1..4 {
                    let expected = tenants.iter().filter(|x| **x == t).count();
                    prop_assert_eq!(table.list(TenantId::new(t)).len(), expected);
                }
            }
        }
    }
}
