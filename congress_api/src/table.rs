//! Tabular view of a list of JSON records.

use std::collections::HashMap;
use std::fmt;
use std::io;

use serde::Serialize;
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::Error;

/// Rows of JSON values under named columns.
///
/// Built from a list of records: one row per record, one column per key,
/// with columns ordered by first appearance across all records. A record
/// lacking a column holds `null` in that cell.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        let records: Vec<Map<String, Value>> = records.into_iter().collect();

        let mut columns = Vec::new();
        let mut index = HashMap::new();
        for key in records.iter().flat_map(Map::keys) {
            if !index.contains_key(key) {
                index.insert(key.clone(), columns.len());
                columns.push(key.clone());
            }
        }

        let rows = records
            .into_iter()
            .map(|record| {
                let mut row = vec![Value::Null; columns.len()];
                for (key, value) in record {
                    row[index[&key]] = value;
                }
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.width())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Writes the table as CSV with a header row. Strings are written as is,
    /// `null` as an empty field, anything else as its JSON text.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(cell_text))?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().cloned());
        for row in &self.rows {
            builder.push_record(row.iter().map(cell_text));
        }
        let mut table = builder.build();
        table.with(Style::psql());
        write!(f, "{}", table)
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Value) -> Vec<Map<String, Value>> {
        values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn one_row_per_record() {
        let table = Table::from_records(records(json!([
            {"id": "A000360", "party": "R"},
            {"id": "B000575", "party": "R"},
            {"id": "S001193", "party": "D"},
        ])));
        assert_eq!(table.shape(), (3, 2));
        assert_eq!(table.columns(), ["id", "party"]);
        assert_eq!(table.get(2, "id"), Some(&json!("S001193")));
    }

    #[test]
    fn columns_are_union_in_first_seen_order() {
        let table = Table::from_records(records(json!([
            {"b": 1, "a": 2},
            {"c": 3, "a": 4},
        ])));
        assert_eq!(table.columns(), ["b", "a", "c"]);
        assert_eq!(table.rows()[0], vec![json!(1), json!(2), Value::Null]);
        assert_eq!(table.rows()[1], vec![Value::Null, json!(4), json!(3)]);
    }

    #[test]
    fn empty_records_give_empty_table() {
        let table = Table::from_records(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.shape(), (0, 0));
    }

    #[test]
    fn column_access() {
        let table = Table::from_records(records(json!([
            {"id": "x", "votes": 10},
            {"id": "y", "votes": 20},
        ])));
        let votes: Vec<&Value> = table.column("votes").unwrap().collect();
        assert_eq!(votes, [&json!(10), &json!(20)]);
        assert!(table.column("missing").is_none());
        assert_eq!(table.get(5, "id"), None);
    }

    #[test]
    fn csv_output() {
        let table = Table::from_records(records(json!([
            {"member_id": "A000360", "name": "Lamar Alexander", "seniority": 15},
            {"member_id": "B001230", "in_office": true},
        ])));
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(csv, @r"
        member_id,name,seniority,in_office
        A000360,Lamar Alexander,15,
        B001230,,,true
        ");
    }

    #[test]
    fn display_renders_header_and_cells() {
        let table = Table::from_records(records(json!([
            {"member_id": "A000360", "party": "R"},
        ])));
        let rendered = table.to_string();
        assert!(rendered.contains("member_id"));
        assert!(rendered.contains("A000360"));
        assert!(rendered.contains("party"));
    }
}
