use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A rectangular table of string cells extracted from a statistics page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable {
    /// Column labels, unique within the table
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` cells wide
    pub rows: Vec<Vec<String>>,
}

/// Borrowed view of a single table row
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl StatTable {
    /// Create a table, deduplicating labels and squaring off ragged rows
    ///
    /// Repeated labels keep their first occurrence as-is; later ones become
    /// `Label.1`, `Label.2`, and so on. Short rows are padded with empty cells
    /// and long rows truncated to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers = dedup_labels(headers);
        let width = headers.len();

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by label
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    /// Iterate over rows as lookup views
    pub fn iter_rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(move |cells| TableRow { headers: &self.headers, cells })
    }
}

impl<'a> TableRow<'a> {
    /// Cell value for a column; `None` when the table has no such column
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|h| h == column)?;
        self.cells.get(index).map(String::as_str)
    }

    /// Check if the row's table has a column
    pub fn contains(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

fn dedup_labels(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    headers
        .into_iter()
        .map(|label| {
            let count = seen.entry(label.clone()).or_insert(0);
            let unique = if *count == 0 { label } else { format!("{label}.{count}") };
            *count += 1;
            unique
        })
        .collect()
}
