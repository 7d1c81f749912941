//! The seam between a [ColumnValues](crate::ColumnValues) container and
//! whatever executes the query and produces rows.

use std::error::Error;

use crate::Value;

#[derive(Debug, thiserror::Error)]
/// An error that can occur while scanning a row into a set of slots.
pub enum ScanError {
    #[error("expected {expected} destination slots, row has {actual} columns")]
    /// The number of columns in the row does not match the number
    /// of slots being scanned into.
    ColumnCountMismatch { expected: usize, actual: usize },
    #[error("row source error: {0}")]
    /// The row source failed to produce the row.
    Source(#[source] Box<dyn Error + Send + Sync>),
}

/// A source of a single row which can write its values into
/// caller supplied slots, one per column in column order.
pub trait RowScanner {
    /// The number of columns in the row.
    fn column_count(&self) -> usize;

    /// Writes the row's values into `slots`.
    ///
    /// `slots` is guaranteed to be exactly [Self::column_count] long.
    fn scan_into(&mut self, slots: &mut [Value]) -> Result<(), ScanError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
/// An already fetched row held in memory.
///
/// Scanning moves the values out of the buffer, leaving [Value::Null] behind.
pub struct RowBuffer(Vec<Value>);

impl RowBuffer {
    /// Creates a new [RowBuffer] holding the given values.
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl<V: Into<Value>> FromIterator<V> for RowBuffer {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl RowScanner for RowBuffer {
    fn column_count(&self) -> usize {
        self.0.len()
    }

    fn scan_into(&mut self, slots: &mut [Value]) -> Result<(), ScanError> {
        if slots.len() != self.0.len() {
            return Err(ScanError::ColumnCountMismatch {
                expected: slots.len(),
                actual: self.0.len(),
            });
        }

        for (slot, value) in slots.iter_mut().zip(self.0.iter_mut()) {
            *slot = std::mem::take(value);
        }

        Ok(())
    }
}
