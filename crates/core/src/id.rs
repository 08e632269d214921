//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are sequential integers assigned by the store, mirroring the
//! relational schema. Newtypes keep tenant ids and record ids from being
//! swapped at a call site.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a tenant (multi-tenant boundary).
///
/// Every scoped record carries a tenant reference equal to the acting
/// session's tenant; the tenant record itself is scoped by its own id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(i64);

/// Identifier of a user (actor identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

/// Identifier of a persisted record within one table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

macro_rules! impl_i64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .parse::<i64>()
                    .map_err(|e| DomainError::validation(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_i64_newtype!(TenantId, "TenantId");
impl_i64_newtype!(UserId, "UserId");
impl_i64_newtype!(RecordId, "RecordId");

impl RecordId {
    /// Placeholder id for a record that has not been persisted yet.
    ///
    /// The store assigns the real id on insert.
    pub const UNASSIGNED: RecordId = RecordId(0);
}

impl From<RecordId> for TenantId {
    fn from(value: RecordId) -> Self {
        TenantId(value.0)
    }
}

impl From<TenantId> for RecordId {
    fn from(value: TenantId) -> Self {
        RecordId(value.0)
    }
}

impl From<UserId> for RecordId {
    fn from(value: UserId) -> Self {
        RecordId(value.0)
    }
}

impl From<RecordId> for UserId {
    fn from(value: RecordId) -> Self {
        UserId(value.0)
    }
}
