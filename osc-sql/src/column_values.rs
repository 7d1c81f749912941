use std::fmt::{Display, Formatter};

use tracing::trace;

use crate::columns::COLUMN_DELIMITER;
use crate::{ColumnMap, RowScanner, ScanError, Value};

#[derive(Debug, Clone, Default, PartialEq)]
/// The values of a single row, in column order.
///
/// The container hands out its own storage as scan slots, so a value written
/// through slot `i` is always what [ColumnValues::values] returns at `i`.
/// It is meant to be created per row and discarded once the row is consumed.
pub struct ColumnValues {
    values: Vec<Value>,
}

impl ColumnValues {
    /// Allocates `len` empty slots ready to be scanned into.
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![Value::Null; len],
        }
    }

    /// Wraps an already populated set of values without copying them.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    #[inline]
    /// Returns the current values in column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    /// Consumes the container returning the values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    /// Returns the addressable slots backing this row, one per column.
    ///
    /// Writing to a slot writes to the container itself.
    pub fn scan_slots(&mut self) -> &mut [Value] {
        &mut self.values
    }

    /// Fills the slots from the given [RowScanner].
    ///
    /// The slots are left untouched if the scanner's column count
    /// does not match the number of slots.
    pub fn scan<S: RowScanner + ?Sized>(&mut self, scanner: &mut S) -> Result<(), ScanError> {
        let actual = scanner.column_count();
        if actual != self.values.len() {
            return Err(ScanError::ColumnCountMismatch {
                expected: self.values.len(),
                actual,
            });
        }

        trace!(columns = actual, "Scanning row into slots");
        scanner.scan_into(self.scan_slots())
    }

    /// Renders the value at `index` as a string.
    ///
    /// Byte values are treated as text, everything else uses the
    /// [Display] rendering of the [Value].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn string_column(&self, index: usize) -> String {
        match &self.values[index] {
            Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            other => other.to_string(),
        }
    }

    /// Renders the value of the named column, using `columns` to find
    /// its position.
    ///
    /// Returns `None` if the column is unknown or its ordinal is outside
    /// of this row.
    pub fn string_column_by_name(&self, columns: &ColumnMap, name: &str) -> Option<String> {
        columns
            .ordinal(name)
            .filter(|ordinal| *ordinal < self.values.len())
            .map(|ordinal| self.string_column(ordinal))
    }
}

impl Display for ColumnValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.values.len() {
            if i > 0 {
                write!(f, "{COLUMN_DELIMITER}")?;
            }
            f.write_str(&self.string_column(i))?;
        }
        Ok(())
    }
}

impl From<Vec<Value>> for ColumnValues {
    fn from(value: Vec<Value>) -> Self {
        Self::from_values(value)
    }
}
