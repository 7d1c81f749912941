use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::ColumnList;

/// The name given to the primary key of a table.
pub const PRIMARY_KEY_NAME: &str = "PRIMARY";

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
/// A named unique key of a table and the columns it covers.
///
/// No validation is done on the key, it is up to the caller to ensure
/// the columns exist within the owning table.
pub struct UniqueKey {
    #[builder(into)]
    /// The name of the key.
    pub name: String,
    #[builder(into)]
    /// The columns making up the key, in key order.
    pub columns: ColumnList,
    #[builder(default)]
    /// Whether any of the key columns may contain a null value.
    pub has_nullable: bool,
}

impl UniqueKey {
    /// Creates a new [UniqueKey].
    pub fn new(name: impl Into<String>, columns: ColumnList, has_nullable: bool) -> Self {
        Self {
            name: name.into(),
            columns,
            has_nullable,
        }
    }

    #[inline]
    /// Returns `true` if this key is the table's primary key.
    pub fn is_primary(&self) -> bool {
        self.name == PRIMARY_KEY_NAME
    }
}

impl Display for UniqueKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}; has nullable: {}",
            self.name, self.columns, self.has_nullable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("PRIMARY", true)]
    #[case("primary", false)]
    #[case("PRIMARY ", false)]
    #[case("uidx_email", false)]
    fn test_unique_key_is_primary(#[case] name: &str, #[case] is_primary: bool) {
        let key = UniqueKey::new(name, ColumnList::parse("id"), false);
        assert_eq!(key.is_primary(), is_primary, "Unexpected result for {name:?}");
    }

    #[test]
    fn test_unique_key_builder() {
        let key = UniqueKey::builder()
            .name("uidx_tenant_email")
            .columns(ColumnList::parse("tenant_id,email"))
            .has_nullable(true)
            .build();

        assert_eq!(key.name, "uidx_tenant_email");
        assert_eq!(key.columns.len(), 2);
        assert!(key.has_nullable);
        assert!(!key.is_primary());

        let key = UniqueKey::builder()
            .name(PRIMARY_KEY_NAME)
            .columns(ColumnList::parse("id"))
            .build();
        assert!(!key.has_nullable, "Nullable flag should default to false");
        assert!(key.is_primary());
    }

    #[test]
    fn test_unique_key_display() {
        let key = UniqueKey::new("PRIMARY", ColumnList::parse("id"), false);
        assert_eq!(key.to_string(), "PRIMARY: id; has nullable: false");

        let key = UniqueKey::new("uidx", ColumnList::parse("a,b"), true);
        assert_eq!(key.to_string(), "uidx: a,b; has nullable: true");
    }

    #[test]
    fn test_unique_key_serde() {
        let key = UniqueKey::new("uidx", ColumnList::parse("a,b"), true);
        let value = serde_json::to_value(&key).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "uidx", "columns": ["a", "b"], "has_nullable": true})
        );
    }
}
