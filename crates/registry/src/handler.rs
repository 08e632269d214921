//! CRUD handlers dispatched through the registry.
//!
//! [`EntityHandler`] is the object-safe seam the routes call: payloads in
//! and out are JSON values, so one trait object covers every record type.
//! [`GenericHandler`] implements it for any [`Record`]; [`UserHandler`] is
//! the one specialization, hashing credentials before they reach the store.

use std::marker::PhantomData;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use gestao_core::{DomainError, DomainResult, Record, RecordId, TenantId};
use gestao_domain::Usuario;
use gestao_store::RecordStore;

/// Columns never matched by the free-text search.
const NON_SEARCHABLE_FIELDS: &[&str] = &["id", "id_empresa", "criado_em", "atualizado_em", "senha"];

/// Columns left out of CSV exports.
const CSV_SKIPPED_FIELDS: &[&str] = &["id_empresa", "senha"];

/// List parameters shared by the paginated listing and the CSV export.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub skip: usize,
    pub limit: usize,
    pub situacao: Option<String>,
    pub search_term: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { skip: 0, limit: 10, situacao: None, search_term: None }
    }
}

/// One page of serialized records plus the total over the filtered set.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub items: Vec<Value>,
    pub total_count: usize,
}

/// Object-safe CRUD surface for one registered record type.
pub trait EntityHandler: Send + Sync {
    fn create(&self, tenant: TenantId, payload: Value) -> DomainResult<Value>;
    fn get(&self, tenant: TenantId, id: RecordId) -> DomainResult<Value>;
    fn list(&self, tenant: TenantId, query: &ListQuery) -> DomainResult<Page>;
    fn update(&self, tenant: TenantId, id: RecordId, payload: Value) -> DomainResult<Value>;
    fn delete(&self, tenant: TenantId, id: RecordId) -> DomainResult<Value>;
    /// All filtered rows of the tenant as CSV, header row first.
    fn export_csv(&self, tenant: TenantId, query: &ListQuery) -> DomainResult<String>;
}

/// Default handler: schema coercion, tenant injection, store round-trips.
pub struct GenericHandler<T: Record, S: RecordStore<T>> {
    store: S,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record, S: RecordStore<T>> GenericHandler<T, S> {
    pub fn new(store: S) -> Self {
        Self { store, _record: PhantomData }
    }
}

impl<T: Record, S: RecordStore<T>> EntityHandler for GenericHandler<T, S> {
    fn create(&self, tenant: TenantId, payload: Value) -> DomainResult<Value> {
        let input: T::Create = parse_payload::<T, _>(payload)?;
        let record = T::from_create(input, tenant, Utc::now());
        let stored = self.store.insert(record)?;
        to_json::<T>(&stored)
    }

    fn get(&self, tenant: TenantId, id: RecordId) -> DomainResult<Value> {
        let record = self.store.get(tenant, id)?;
        to_json::<T>(&record)
    }

    fn list(&self, tenant: TenantId, query: &ListQuery) -> DomainResult<Page> {
        list_rows::<T, _>(&self.store, tenant, query)
    }

    fn update(&self, tenant: TenantId, id: RecordId, payload: Value) -> DomainResult<Value> {
        let mut record = self.store.get(tenant, id)?;
        let input: T::Update = parse_payload::<T, _>(payload)?;
        record.apply_update(input, Utc::now());
        let stored = self.store.replace(record)?;
        to_json::<T>(&stored)
    }

    fn delete(&self, tenant: TenantId, id: RecordId) -> DomainResult<Value> {
        let removed = self.store.remove(tenant, id)?;
        to_json::<T>(&removed)
    }

    fn export_csv(&self, tenant: TenantId, query: &ListQuery) -> DomainResult<String> {
        export_rows::<T, _>(&self.store, tenant, query)
    }
}

/// Handler for the credential-bearing user type. Identical to the generic
/// path except that plain passwords are hashed before touching the store
/// and never merged through `apply_update`.
pub struct UserHandler<S: RecordStore<Usuario>> {
    store: S,
}

impl<S: RecordStore<Usuario>> UserHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn hash(plain: &str) -> DomainResult<String> {
        if plain.len() < 8 {
            return Err(DomainError::validation("senha must be at least 8 characters"));
        }
        gestao_auth::hash_password(plain)
            .map_err(|e| DomainError::structural(Usuario::TYPE_NAME, e.to_string()))
    }
}

impl<S: RecordStore<Usuario>> EntityHandler for UserHandler<S> {
    fn create(&self, tenant: TenantId, payload: Value) -> DomainResult<Value> {
        let mut input: <Usuario as Record>::Create = parse_payload::<Usuario, _>(payload)?;
        input.senha = Self::hash(&input.senha)?;
        let record = Usuario::from_create(input, tenant, Utc::now());
        let stored = self.store.insert(record)?;
        to_json::<Usuario>(&stored)
    }

    fn get(&self, tenant: TenantId, id: RecordId) -> DomainResult<Value> {
        let record = self.store.get(tenant, id)?;
        to_json::<Usuario>(&record)
    }

    fn list(&self, tenant: TenantId, query: &ListQuery) -> DomainResult<Page> {
        list_rows::<Usuario, _>(&self.store, tenant, query)
    }

    fn update(&self, tenant: TenantId, id: RecordId, payload: Value) -> DomainResult<Value> {
        let mut record = self.store.get(tenant, id)?;
        let mut input: <Usuario as Record>::Update = parse_payload::<Usuario, _>(payload)?;
        if let Some(senha) = input.senha.take()
            && !senha.is_empty()
        {
            record.senha = Self::hash(&senha)?;
        }
        record.apply_update(input, Utc::now());
        let stored = self.store.replace(record)?;
        to_json::<Usuario>(&stored)
    }

    fn delete(&self, tenant: TenantId, id: RecordId) -> DomainResult<Value> {
        let removed = self.store.remove(tenant, id)?;
        to_json::<Usuario>(&removed)
    }

    fn export_csv(&self, tenant: TenantId, query: &ListQuery) -> DomainResult<String> {
        export_rows::<Usuario, _>(&self.store, tenant, query)
    }
}

fn parse_payload<T: Record, I: serde::de::DeserializeOwned>(payload: Value) -> DomainResult<I> {
    serde_json::from_value(payload).map_err(|e| DomainError::validation(e.to_string()))
}

fn to_json<T: Record>(record: &T) -> DomainResult<Value> {
    serde_json::to_value(record).map_err(|e| {
        tracing::error!(model = T::TYPE_NAME, cause = %e, "record serialization failed");
        DomainError::structural(T::TYPE_NAME, e.to_string())
    })
}

fn filtered_rows<T: Record, S: RecordStore<T>>(
    store: &S,
    tenant: TenantId,
    query: &ListQuery,
) -> DomainResult<Vec<Value>> {
    let mut rows = Vec::new();
    for record in store.list(tenant) {
        let json = to_json::<T>(&record)?;
        if let Some(situacao) = &query.situacao {
            let matches = json
                .get("situacao")
                .and_then(json_text)
                .map(|v| v == *situacao)
                .unwrap_or(false);
            if !matches {
                continue;
            }
        }
        if let Some(term) = &query.search_term
            && !matches_search::<T>(&json, term)
        {
            continue;
        }
        rows.push(json);
    }
    Ok(rows)
}

fn list_rows<T: Record, S: RecordStore<T>>(
    store: &S,
    tenant: TenantId,
    query: &ListQuery,
) -> DomainResult<Page> {
    let rows = filtered_rows::<T, _>(store, tenant, query)?;
    let total_count = rows.len();
    let items = rows.into_iter().skip(query.skip).take(query.limit).collect();
    Ok(Page { items, total_count })
}

fn export_rows<T: Record, S: RecordStore<T>>(
    store: &S,
    tenant: TenantId,
    query: &ListQuery,
) -> DomainResult<String> {
    let headers: Vec<&str> = T::COLUMNS
        .iter()
        .map(|c| c.name)
        .filter(|n| !CSV_SKIPPED_FIELDS.contains(n))
        .collect();

    let mut out = String::new();
    out.push_str(&headers.iter().map(|h| csv_escape(h)).collect::<Vec<_>>().join(","));
    out.push('\n');

    for row in filtered_rows::<T, _>(store, tenant, query)? {
        let line: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).and_then(json_text).unwrap_or_default())
            .map(|v| csv_escape(&v))
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    Ok(out)
}

/// Case- and accent-insensitive substring match over every searchable column.
fn matches_search<T: Record>(json: &Value, term: &str) -> bool {
    let needle = fold(term);
    T::COLUMNS
        .iter()
        .filter(|c| !NON_SEARCHABLE_FIELDS.contains(&c.name))
        .filter_map(|c| json.get(c.name).and_then(json_text))
        .any(|text| fold(&text).contains(&needle))
}

/// Text projection of a JSON value, mirroring a cast-to-text comparison.
/// Nulls project to nothing.
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => serde_json::to_string(other).ok(),
    }
}

/// Lowercase and strip Portuguese diacritics.
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
