//! `gestao-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the shared error taxonomy, the [`Record`] contract every
//! business record type implements, and the column descriptor types that
//! replace runtime reflection with explicitly authored tables.

pub mod column;
pub mod error;
pub mod id;
pub mod record;

pub use column::{ColumnDef, ColumnKind, EnumMember};
pub use error::{DomainError, DomainResult};
pub use id::{RecordId, TenantId, UserId};
pub use record::Record;
