use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Subcommand;
use osc_sql::{ColumnList, ColumnValues, RowBuffer, UniqueKey, Value};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};

/// The literal used on the command line to represent a null value.
const NULL_LITERAL: &str = "NULL";

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a comma delimited column list and display each column's ordinal
    Columns {
        /// The raw column list, e.g. `id,name,created_at`.
        raw: String,
    },
    /// Describe a unique key
    Key {
        #[arg(long)]
        /// The name of the key, `PRIMARY` for the primary key.
        name: String,
        #[arg(long)]
        /// The comma delimited columns covered by the key.
        columns: String,
        #[arg(long)]
        /// Mark the key as having at least one nullable column.
        nullable: bool,
    },
    /// Scan a row of literal values and render it
    Row {
        #[arg(long)]
        /// The comma delimited columns of the row.
        columns: String,
        /// The row values in column order. {n}
        /// {n}
        /// * `NULL` is a null value. {n}
        /// * `true` and `false` are booleans. {n}
        /// * Integers and floats are numbers. {n}
        /// * Anything else is passed through as raw bytes.
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

impl Commands {
    /// Executes the command returning the output to display.
    pub fn execute(self, json: bool) -> Result<String> {
        match self {
            Commands::Columns { raw } => {
                let columns = ColumnList::parse(&raw);
                info!(columns = columns.len(), "Parsed column list");
                Ok(render_columns(&columns, json))
            },
            Commands::Key {
                name,
                columns,
                nullable,
            } => {
                let key = UniqueKey::builder()
                    .name(name)
                    .columns(ColumnList::parse(&columns))
                    .has_nullable(nullable)
                    .build();
                Ok(render_key(&key, json))
            },
            Commands::Row { columns, values } => {
                let columns = ColumnList::parse(&columns);
                let row = scan_literals(&columns, &values)?;
                Ok(render_row(&columns, &row, json))
            },
        }
    }
}

/// Converts a command line literal into the [Value] a driver would produce.
///
/// A literal only becomes a number or a bool if rendering it back gives the
/// exact same text, anything else (`007`, `+5`, `1e3`) stays as raw bytes.
pub fn parse_literal(literal: &str) -> Value {
    if literal == NULL_LITERAL {
        return Value::Null;
    }

    if let Some(v) = parse_exact::<bool>(literal) {
        return Value::Bool(v);
    }

    if let Some(v) = parse_exact::<i64>(literal) {
        return Value::Int(v);
    }

    if let Some(v) = parse_exact::<u64>(literal) {
        return Value::UInt(v);
    }

    // `inf` and `NaN` parse as floats but a driver would hand them back as text.
    if let Some(v) = parse_exact::<f64>(literal).filter(|v| v.is_finite()) {
        return Value::Float(v);
    }

    Value::from(literal.as_bytes())
}

fn parse_exact<T: FromStr + ToString>(literal: &str) -> Option<T> {
    literal
        .parse::<T>()
        .ok()
        .filter(|v| v.to_string() == literal)
}

/// Scans the given literals into a freshly allocated row for `columns`.
pub fn scan_literals(columns: &ColumnList, literals: &[String]) -> Result<ColumnValues> {
    let mut buffer: RowBuffer = literals.iter().map(|l| parse_literal(l)).collect();
    let mut row = ColumnValues::new(columns.len());

    row.scan(&mut buffer)
        .with_context(|| format!("Scan row into columns `{columns}`"))?;
    debug!(row = %row, "Scanned row");

    Ok(row)
}

fn render_columns(columns: &ColumnList, json: bool) -> String {
    let ordinals = columns.ordinals();

    if json {
        let ordinals = ordinals
            .iter()
            .map(|(name, ordinal)| (name.to_string(), json!(ordinal)))
            .collect::<serde_json::Map<_, _>>();
        return json!({
            "columns": columns,
            "ordinals": ordinals,
        })
        .to_string();
    }

    let mut lines = vec![format!("columns: {columns}")];
    for (position, name) in columns.iter().enumerate() {
        // Duplicated names resolve to their last position.
        let ordinal = ordinals.ordinal(name).unwrap_or(position);
        lines.push(format!("{position}: {name} -> {ordinal}"));
    }
    lines.join("\n")
}

fn render_key(key: &UniqueKey, json: bool) -> String {
    if json {
        return json!({
            "key": key,
            "is_primary": key.is_primary(),
        })
        .to_string();
    }

    format!("{key}\nprimary: {}", key.is_primary())
}

fn render_row(columns: &ColumnList, row: &ColumnValues, json: bool) -> String {
    if json {
        let values = columns
            .iter()
            .zip(row.values())
            .enumerate()
            .map(|(i, (name, value))| {
                let rendered = if value.is_null() {
                    JsonValue::Null
                } else {
                    JsonValue::String(row.string_column(i))
                };
                json!({ "column": name, "value": rendered })
            })
            .collect::<Vec<_>>();
        return json!({
            "row": row.to_string(),
            "values": values,
        })
        .to_string();
    }

    let mut lines = vec![row.to_string()];
    for (i, name) in columns.iter().enumerate() {
        lines.push(format!("{name}={}", row.string_column(i)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("NULL", Value::Null)]
    #[case("null", Value::from(b"null".as_slice()))]
    #[case("true", Value::Bool(true))]
    #[case("false", Value::Bool(false))]
    #[case("7", Value::Int(7))]
    #[case("-12", Value::Int(-12))]
    #[case("18446744073709551615", Value::UInt(u64::MAX))]
    #[case("1.5", Value::Float(1.5))]
    #[case("inf", Value::from(b"inf".as_slice()))]
    #[case("Jo", Value::from(b"Jo".as_slice()))]
    #[case("", Value::from(b"".as_slice()))]
    #[case("+5", Value::from(b"+5".as_slice()))]
    #[case("007", Value::from(b"007".as_slice()))]
    #[case("1e3", Value::from(b"1e3".as_slice()))]
    #[case("1.50", Value::from(b"1.50".as_slice()))]
    #[case("-0", Value::Float(-0.0))]
    fn test_parse_literal(#[case] literal: &str, #[case] expected: Value) {
        assert_eq!(parse_literal(literal), expected, "Unexpected value for {literal:?}");
    }

    #[rstest::rstest]
    #[case("+5")]
    #[case("007")]
    #[case("1e3")]
    #[case("-0")]
    #[case("-12")]
    #[case("2.25")]
    #[case("18446744073709551615")]
    #[case("true")]
    #[case("NaN")]
    fn test_parse_literal_renders_unchanged(#[case] literal: &str) {
        let rendered = parse_literal(literal).to_string();
        assert_eq!(rendered, literal, "Literal should render as it was given");
    }

    fn literals(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_scan_literals() {
        let columns = ColumnList::parse("id,name,created_at");
        let row = scan_literals(&columns, &literals(&["7", "Jo", "NULL"])).unwrap();
        assert_eq!(row.to_string(), "7,Jo,<nil>");
    }

    #[rstest::rstest]
    #[case("id,name", &["1"])]
    #[case("id", &["1", "2"])]
    fn test_scan_literals_mismatch(#[case] columns: &str, #[case] values: &[&str]) {
        let columns = ColumnList::parse(columns);
        let err = scan_literals(&columns, &literals(values)).unwrap_err();
        assert!(
            err.downcast_ref::<osc_sql::ScanError>().is_some(),
            "Expected a scan error, got: {err:?}"
        );
    }

    #[test]
    fn test_columns_command_text() {
        let output = Commands::Columns {
            raw: "id,name,id".to_string(),
        }
        .execute(false)
        .unwrap();
        assert_eq!(output, "columns: id,name,id\n0: id -> 2\n1: name -> 1\n2: id -> 2");
    }

    #[test]
    fn test_columns_command_json() {
        let output = Commands::Columns {
            raw: "id,name".to_string(),
        }
        .execute(true)
        .unwrap();
        let value: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({"columns": ["id", "name"], "ordinals": {"id": 0, "name": 1}})
        );
    }

    #[test]
    fn test_key_command() {
        let output = Commands::Key {
            name: "PRIMARY".to_string(),
            columns: "id".to_string(),
            nullable: false,
        }
        .execute(false)
        .unwrap();
        assert_eq!(output, "PRIMARY: id; has nullable: false\nprimary: true");

        let output = Commands::Key {
            name: "uidx".to_string(),
            columns: "a,b".to_string(),
            nullable: true,
        }
        .execute(true)
        .unwrap();
        let value: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(value["is_primary"], json!(false));
        assert_eq!(value["key"]["columns"], json!(["a", "b"]));
        assert_eq!(value["key"]["has_nullable"], json!(true));
    }

    #[test]
    fn test_row_command() {
        let output = Commands::Row {
            columns: "id,name,created_at".to_string(),
            values: literals(&["7", "Jo", "NULL"]),
        }
        .execute(false)
        .unwrap();
        assert_eq!(output, "7,Jo,<nil>\nid=7\nname=Jo\ncreated_at=<nil>");

        let output = Commands::Row {
            columns: "id,name".to_string(),
            values: literals(&["7", "NULL"]),
        }
        .execute(true)
        .unwrap();
        let value: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "row": "7,<nil>",
                "values": [
                    {"column": "id", "value": "7"},
                    {"column": "name", "value": null},
                ],
            })
        );
    }
}
