//! Parsed tabular data.
//!
//! A [`Table`] is an ordered list of [`Row`]s sharing one header. Cells are
//! kept exactly as they appeared in the file; [`CellValue`] and
//! [`ColumnKind`] give an inferred scalar view on top of the raw text.

use std::sync::Arc;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::PipelineError;

/// Parsed CSV content: a header plus data rows of the same width.
///
/// Serializes as `{"columns": [...], "rows": [{column: cell, ...}, ...]}`
/// with row keys in column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

/// One data row. Cells are positionally aligned with the table's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    cells: Vec<String>,
}

/// Inferred scalar value of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

/// Inferred type of a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// No non-empty cells.
    Empty,
    Integer,
    Float,
    Boolean,
    Text,
}

impl CellValue {
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>()
            && f.is_finite()
        {
            return CellValue::Float(f);
        }
        if s.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if s.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }
        CellValue::Text(raw.to_string())
    }

    fn kind(&self) -> ColumnKind {
        match self {
            CellValue::Empty => ColumnKind::Empty,
            CellValue::Integer(_) => ColumnKind::Integer,
            CellValue::Float(_) => ColumnKind::Float,
            CellValue::Boolean(_) => ColumnKind::Boolean,
            CellValue::Text(_) => ColumnKind::Text,
        }
    }
}

impl ColumnKind {
    /// Combine the kind seen so far with the kind of another cell.
    fn merge(self, other: ColumnKind) -> ColumnKind {
        use ColumnKind::*;
        match (self, other) {
            (Empty, k) | (k, Empty) => k,
            (a, b) if a == b => a,
            (Integer, Float) | (Float, Integer) => Float,
            _ => Text,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }

    pub fn name(self) -> &'static str {
        match self {
            ColumnKind::Empty => "empty",
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Text => "text",
        }
    }
}

impl Table {
    /// Build a table from a raw header and raw rows.
    ///
    /// Header names are made unique: repeats of `x` become `x.1`, `x.2`, ...
    /// and blank names become `Unnamed: <index>`. Every row must have the
    /// header's width.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, PipelineError> {
        let columns: Arc<[String]> = unique_columns(header).into();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                if cells.len() != columns.len() {
                    return Err(PipelineError::RowWidth {
                        row,
                        expected: columns.len(),
                        found: cells.len(),
                    });
                }
                Ok(Row {
                    columns: columns.clone(),
                    cells,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            columns: columns.to_vec(),
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Inferred kind of every column, in column order.
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        (0..self.columns.len())
            .map(|idx| {
                self.rows.iter().fold(ColumnKind::Empty, |acc, row| {
                    acc.merge(CellValue::infer(&row.cells[idx]).kind())
                })
            })
            .collect()
    }
}

impl Row {
    /// Raw cell text for a column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.cells.get(idx).map(String::as_str)
    }

    /// Raw cell text by position.
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Inferred value for a column name.
    pub fn value(&self, column: &str) -> Option<CellValue> {
        self.get(column).map(CellValue::infer)
    }

    /// `(column, cell)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(String::as_str))
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, cell) in self.iter() {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

fn unique_columns(header: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(header.len());
    for (idx, name) in header.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{n}");
            n += 1;
        }
        seen.push(candidate);
    }
    seen
}
