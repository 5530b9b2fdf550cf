//! Declarative field-to-column mapping for the submission event table.
//!
//! The original model declared its persistence mapping through annotations
//! resolved by reflection. Here the mapping is an explicit table the storage
//! layer consumes when building SQL: one entry per persisted field, in
//! declaration order, naming the column and the persisted representation.

/// Table holding submission event rows.
pub const TABLE: &str = "pass_submission_event";

/// How a field is represented in its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repr {
    /// Prefixed ID string (`evt_...`, `usr_...`, `sub_...`).
    IdText,
    /// Plain integer.
    Integer,
    /// Canonical enum tag decoded through [`EventType`](crate::EventType)'s converter.
    EventTypeTag,
    /// Canonical enum tag decoded through [`PerformerRole`](crate::PerformerRole)'s converter.
    RoleTag,
    /// RFC 3339 text, preserving the originating UTC offset.
    Rfc3339Text,
    /// Free-form text.
    Text,
}

/// One field-to-column mapping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Record field name.
    pub field: &'static str,
    /// Column name in [`TABLE`].
    pub column: &'static str,
    /// Persisted representation.
    pub repr: Repr,
}

/// All persisted columns, in declaration order: identity first, then the
/// declared fields.
pub const COLUMNS: &[ColumnMapping] = &[
    ColumnMapping {
        field: "identity.id",
        column: "id",
        repr: Repr::IdText,
    },
    ColumnMapping {
        field: "identity.version",
        column: "version",
        repr: Repr::Integer,
    },
    ColumnMapping {
        field: "event_type",
        column: "event_type",
        repr: Repr::EventTypeTag,
    },
    ColumnMapping {
        field: "performed_date",
        column: "performed_date",
        repr: Repr::Rfc3339Text,
    },
    ColumnMapping {
        field: "performed_by",
        column: "performed_by",
        repr: Repr::IdText,
    },
    ColumnMapping {
        field: "performer_role",
        column: "performer_role",
        repr: Repr::RoleTag,
    },
    ColumnMapping {
        field: "submission",
        column: "submission",
        repr: Repr::IdText,
    },
    ColumnMapping {
        field: "comment",
        column: "comment",
        repr: Repr::Text,
    },
    ColumnMapping {
        field: "link",
        column: "link",
        repr: Repr::Text,
    },
];

/// Comma-joined column list for SELECT and INSERT statements.
#[must_use]
pub fn column_list() -> String {
    COLUMNS
        .iter()
        .map(|c| c.column)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Positional placeholder list (`$1, $2, ...`) matching [`column_list`].
#[must_use]
pub fn placeholder_list() -> String {
    (1..=COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SET clause for updates: every non-identity column bound positionally
/// starting at `$first`, with the version bumped in place.
#[must_use]
pub fn update_set_list(first: usize) -> String {
    let mut clauses: Vec<String> = COLUMNS
        .iter()
        .filter(|c| !c.field.starts_with("identity."))
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", c.column, first + i))
        .collect();
    clauses.push("version = version + 1".to_string());
    clauses.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name() {
        assert_eq!(TABLE, "pass_submission_event");
    }

    #[test]
    fn test_identity_columns_come_first() {
        assert_eq!(COLUMNS[0].column, "id");
        assert_eq!(COLUMNS[1].column, "version");
    }

    #[test]
    fn test_column_names_unique() {
        let unique: std::collections::HashSet<_> = COLUMNS.iter().map(|c| c.column).collect();
        assert_eq!(unique.len(), COLUMNS.len());
    }

    #[test]
    fn test_enum_fields_persist_as_tags() {
        let event_type = COLUMNS.iter().find(|c| c.field == "event_type").unwrap();
        assert_eq!(event_type.repr, Repr::EventTypeTag);
        let role = COLUMNS.iter().find(|c| c.field == "performer_role").unwrap();
        assert_eq!(role.repr, Repr::RoleTag);
    }

    #[test]
    fn test_column_list_matches_placeholders() {
        let columns = column_list();
        assert_eq!(columns.split(", ").count(), COLUMNS.len());
        let placeholders = placeholder_list();
        assert!(placeholders.starts_with("$1"));
        assert!(placeholders.ends_with(&format!("${}", COLUMNS.len())));
    }

    #[test]
    fn test_update_set_list_excludes_id_and_bumps_version() {
        let set = update_set_list(2);
        assert!(!set.contains("id ="));
        assert!(set.starts_with("event_type = $2"));
        assert!(set.ends_with("version = version + 1"));
    }
}
