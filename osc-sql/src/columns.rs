use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The delimiter used when parsing and rendering a [ColumnList].
pub const COLUMN_DELIMITER: char = ',';

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// An ordered list of column names in the order declared by the table schema.
///
/// Two lists are equal only if they hold the same names in the same order.
pub struct ColumnList(Vec<String>);

impl ColumnList {
    /// Creates a new [ColumnList] from the given names.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Parses a comma delimited list of column names.
    ///
    /// Names are neither trimmed nor de-duplicated, and an empty input
    /// produces a single empty column name rather than an empty list.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(COLUMN_DELIMITER).map(str::to_string).collect())
    }

    #[inline]
    /// Returns the column names in order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    #[inline]
    /// Returns the number of columns in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    /// Returns `true` if the list contains no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the column names.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Builds the name to ordinal [ColumnMap] for this list.
    pub fn ordinals(&self) -> ColumnMap {
        ColumnMap::new(self)
    }
}

impl Display for ColumnList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{COLUMN_DELIMITER}")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl FromStr for ColumnList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<Vec<String>> for ColumnList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<&[&str]> for ColumnList {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|name| name.to_string()).collect())
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Maps a column name onto its zero-based ordinal position.
///
/// The map is a snapshot of the [ColumnList] it was built from and must be
/// rebuilt if that list is replaced.
pub struct ColumnMap(ahash::HashMap<String, usize>);

impl ColumnMap {
    /// Builds the map from the given list.
    ///
    /// If a name appears more than once, the last occurrence wins.
    pub fn new(columns: &ColumnList) -> Self {
        let mut ordinals =
            ahash::HashMap::with_capacity_and_hasher(columns.len(), Default::default());

        for (ordinal, column) in columns.iter().enumerate() {
            if let Some(previous) = ordinals.insert(column.clone(), ordinal) {
                debug!(
                    column = %column,
                    previous = previous,
                    ordinal = ordinal,
                    "Duplicate column name, keeping the last ordinal"
                );
            }
        }

        Self(ordinals)
    }

    #[inline]
    /// Returns the ordinal position of the given column if it exists.
    pub fn ordinal(&self, column: &str) -> Option<usize> {
        self.0.get(column).copied()
    }

    #[inline]
    /// Returns `true` if the map contains the given column.
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    #[inline]
    /// Returns the number of distinct column names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the `(name, ordinal)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, ordinal)| (name.as_str(), *ordinal))
    }
}

impl From<&ColumnList> for ColumnMap {
    fn from(value: &ColumnList) -> Self {
        Self::new(value)
    }
}
