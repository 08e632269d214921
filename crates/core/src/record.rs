//! The contract every persisted business record type implements.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::column::ColumnDef;
use crate::id::{RecordId, TenantId};

/// A persisted, tenant-scoped business record type.
///
/// Serialization of the record itself is the read schema; [`Record::Create`]
/// and [`Record::Update`] are the write schemas. The three are bound together
/// statically here, so a registered type can never be missing a schema.
///
/// # Invariants
/// - `TABLE_NAME`, pluralized/singularized by the fixed naming convention,
///   must match the externally supplied model name.
/// - The tenant reference is injected server-side: `from_create` receives the
///   session tenant and the create schema has no tenant field.
/// - `apply_update` mutates only fields present in the partial input and
///   refreshes the last-modified timestamp.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Create (input) schema.
    type Create: DeserializeOwned + Send + 'static;
    /// Partial-update (input) schema; every field optional.
    type Update: DeserializeOwned + Send + 'static;

    /// Capitalized singular type name, e.g. `"Produto"`.
    const TYPE_NAME: &'static str;
    /// Physical table name, e.g. `"produtos"`.
    const TABLE_NAME: &'static str;
    /// Persisted columns in declaration order.
    const COLUMNS: &'static [ColumnDef];

    fn id(&self) -> RecordId;

    /// Called by the store when assigning a fresh identifier on insert.
    fn assign_id(&mut self, id: RecordId);

    /// Tenant reference. The tenant record itself returns its own id.
    fn tenant_id(&self) -> TenantId;

    /// Build a new record from validated input, with the tenant reference
    /// forcibly set to `tenant` and the creation timestamp to `now`. The id
    /// stays [`RecordId::UNASSIGNED`] until the store inserts the row.
    fn from_create(input: Self::Create, tenant: TenantId, now: DateTime<Utc>) -> Self;

    /// Apply a partial update: absent fields retain their prior value.
    fn apply_update(&mut self, input: Self::Update, now: DateTime<Utc>);
}
