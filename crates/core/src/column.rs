//! Column descriptor types.
//!
//! Each record type publishes an explicitly authored, build-time `&'static`
//! table of [`ColumnDef`]s in declaration order. The registry, the list
//! filters and the metadata introspector all read these tables instead of
//! inspecting the type at runtime.

/// One member of an enumerated column type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Member name (used for the option label).
    pub name: &'static str,
    /// Underlying persisted value (used for the option value).
    pub value: &'static str,
}

/// Storage kind of a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    /// Fixed-point numeric with the given decimal scale.
    Numeric {
        scale: u8,
    },
    Boolean,
    Date,
    DateTime,
    /// Flexible structured payload.
    Json,
    Enum {
        members: &'static [EnumMember],
    },
}

/// Declaration of one persisted column.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    /// Grouping tab annotation for form rendering.
    pub tab: Option<&'static str>,
    /// Explicit label; derived from the column name when absent.
    pub label: Option<&'static str>,
    /// Format mask annotation; inferred from kind/name when absent.
    pub format_mask: Option<&'static str>,
    /// Physical table name of the referenced type, for foreign keys.
    pub references: Option<&'static str>,
}

impl ColumnDef {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
            primary_key: false,
            unique: false,
            tab: None,
            label: None,
            format_mask: None,
            references: None,
        }
    }

    /// Primary identifier column.
    pub const fn primary(name: &'static str) -> Self {
        let mut col = Self::new(name, ColumnKind::Integer);
        col.nullable = false;
        col.primary_key = true;
        col
    }

    pub const fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn tab(mut self, tab: &'static str) -> Self {
        self.tab = Some(tab);
        self
    }

    pub const fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub const fn mask(mut self, mask: &'static str) -> Self {
        self.format_mask = Some(mask);
        self
    }

    pub const fn references(mut self, table: &'static str) -> Self {
        self.references = Some(table);
        self
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, ColumnKind::Enum { .. })
    }
}
