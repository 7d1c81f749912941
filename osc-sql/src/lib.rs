//! Driver-agnostic building blocks for describing a table's columns and
//! holding a single row whose column types are only known at runtime.
//!
//! - [ColumnList] is the ordered set of column names of a table.
//! - [ColumnMap] translates a column name onto its ordinal position.
//! - [UniqueKey] describes a named unique key and its columns.
//! - [ColumnValues] holds one row of [Value]s and exposes scan slots for a
//!   [RowScanner] to fill in place.

mod column_values;
mod columns;
mod scan;
mod unique_key;
mod value;

pub use self::column_values::ColumnValues;
pub use self::columns::{ColumnList, ColumnMap, COLUMN_DELIMITER};
pub use self::scan::{RowBuffer, RowScanner, ScanError};
pub use self::unique_key::{UniqueKey, PRIMARY_KEY_NAME};
pub use self::value::Value;
