//! `gestao-store` — record persistence.
//!
//! [`RecordStore`] is the seam between the CRUD handlers and whatever holds
//! the rows. The in-memory [`Table`] is the only backend here; a SQL-backed
//! implementation slots in behind the same trait.

mod memory;

pub use memory::Table;

use std::sync::Arc;

use gestao_core::{DomainResult, Record, RecordId, TenantId};

/// Storage seam for one record type.
///
/// All read and mutate operations are tenant-scoped: a row belonging to
/// another tenant behaves exactly like a row that does not exist.
pub trait RecordStore<T: Record>: Send + Sync + 'static {
    /// Fetch one record by id within the tenant.
    fn get(&self, tenant: TenantId, id: RecordId) -> DomainResult<T>;

    /// All records of the tenant, in insertion order.
    fn list(&self, tenant: TenantId) -> Vec<T>;

    /// Insert a new record, assigning its id. Unique columns are enforced
    /// across all tenants, mirroring database-level unique indexes.
    fn insert(&self, record: T) -> DomainResult<T>;

    /// Replace an existing record in place, keyed by its id and tenant.
    fn replace(&self, record: T) -> DomainResult<T>;

    /// Delete one record by id within the tenant, returning it.
    fn remove(&self, tenant: TenantId, id: RecordId) -> DomainResult<T>;

    /// First record matching the predicate, across all tenants.
    ///
    /// Needed by login, which resolves a user before any tenant is known.
    fn find(&self, pred: &dyn Fn(&T) -> bool) -> Option<T>;
}

impl<T: Record, S: RecordStore<T> + ?Sized> RecordStore<T> for Arc<S> {
    fn get(&self, tenant: TenantId, id: RecordId) -> DomainResult<T> {
        (**self).get(tenant, id)
    }

    fn list(&self, tenant: TenantId) -> Vec<T> {
        (**self).list(tenant)
    }

    fn insert(&self, record: T) -> DomainResult<T> {
        (**self).insert(record)
    }

    fn replace(&self, record: T) -> DomainResult<T> {
        (**self).replace(record)
    }

    fn remove(&self, tenant: TenantId, id: RecordId) -> DomainResult<T> {
        (**self).remove(tenant, id)
    }

    fn find(&self, pred: &dyn Fn(&T) -> bool) -> Option<T> {
        (**self).find(pred)
    }
}
