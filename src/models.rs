use crate::error::DatasetError;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single value in a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Classify a raw field the way loaders see it: empty → `Missing`,
    /// finite number → `Number`, anything else → `Text`.
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            return Cell::Missing;
        }
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => Cell::Number(v),
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// Text content, if this is a text cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric content; text cells are parsed leniently.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Cell::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Missing => Ok(()),
        }
    }
}

/// Schema-checked table: an ordered list of column names plus rows holding
/// exactly one [`Cell`] per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Empty dataset with the given schema.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a dataset from a schema and rows, checking every row's width.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<Cell>>) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ds = Self::new(columns);
        for row in rows {
            ds.push_row(row)?;
        }
        Ok(ds)
    }

    /// Append a row; fails if its width does not match the schema.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), DatasetError> {
        if row.len() != self.columns.len() {
            return Err(DatasetError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the schema.
    pub fn column_index(&self, name: &str) -> Result<usize, DatasetError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DatasetError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Cell> + '_, DatasetError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |r| &r[idx]))
    }

    /// Same schema, rows kept where `keep` returns true (order preserved).
    pub(crate) fn retain_rows<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&[Cell]) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r.as_slice())).cloned().collect(),
        }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Cell>] {
        &mut self.rows
    }
}

/// Serialized as an array of row objects whose keys follow schema order.
impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct RowView<'a> {
            columns: &'a [String],
            cells: &'a [Cell],
        }

        impl Serialize for RowView<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.columns.len()))?;
                for (name, cell) in self.columns.iter().zip(self.cells) {
                    map.serialize_entry(name, cell)?;
                }
                map.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowView {
                columns: &self.columns,
                cells: row,
            })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_fields() {
        assert_eq!(Cell::parse(""), Cell::Missing);
        assert_eq!(Cell::parse("  "), Cell::Missing);
        assert_eq!(Cell::parse("12.5"), Cell::Number(12.5));
        assert_eq!(Cell::parse("DEU"), Cell::Text("DEU".into()));
        // "nan"/"inf" parse as floats but are treated as text codes
        assert_eq!(Cell::parse("NAN"), Cell::Text("NAN".into()));
        assert_eq!(Cell::parse("inf"), Cell::Text("inf".into()));
    }

    #[test]
    fn push_row_checks_width() {
        let mut ds = Dataset::new(["code", "value"]);
        assert!(ds.push_row(vec!["DEU".into(), Cell::Number(1.0)]).is_ok());
        let err = ds.push_row(vec!["FRA".into()]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::RowWidth {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn column_lookup_reports_missing_column() {
        let ds = Dataset::new(["code"]);
        assert!(ds.column_index("code").is_ok());
        match ds.column("geo") {
            Err(DatasetError::ColumnNotFound { column }) => assert_eq!(column, "geo"),
            _ => panic!("expected ColumnNotFound"),
        }
    }

    #[test]
    fn json_rows_keep_schema_order() {
        let ds = Dataset::from_rows(
            ["zeta", "alpha"],
            vec![vec!["x".into(), Cell::Missing], vec!["y".into(), Cell::Number(2.0)]],
        )
        .unwrap();
        let s = serde_json::to_string(&ds).unwrap();
        assert_eq!(
            s,
            r#"[{"zeta":"x","alpha":null},{"zeta":"y","alpha":2.0}]"#
        );
    }
}
