//! Tabular results with a fixed column contract.
//!
//! Every listing and detail operation returns a [`Table`] of typed rows. The column names and
//! their order come from [`Row::COLUMNS`] and are stable, so a table can be written straight to
//! CSV with [`Table::write_csv`] or [`Table::to_csv`].
//!
//! ```
//! use deltadna_client::table::{Cell, Row, Table};
//!
//! struct Score {
//!     player: String,
//!     points: i64,
//! }
//!
//! impl Row for Score {
//!     const COLUMNS: &'static [&'static str] = &["Player", "Points"];
//!
//!     fn cells(&self) -> Vec<Cell> {
//!         vec![Cell::from(self.player.as_str()), Cell::from(self.points)]
//!     }
//! }
//!
//! let table: Table<Score> = vec![Score { player: "a, b".to_owned(), points: 3 }].into();
//! assert_eq!(table.to_csv(), "Player,Points\n\"a, b\",3\n");
//! ```

use std::fmt::{self, Write as _};
use std::io;
use std::ops::Index;
use std::slice;

use crate::Result;

/// One value in a table. Missing values render as an empty CSV field.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(value) => write!(f, "{value}"),
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

/// A record that can be laid out as a table row.
///
/// `cells` must return exactly one [`Cell`] per entry of `COLUMNS`, in the same order.
pub trait Row {
    /// Column names, in output order.
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

/// Rows of `R` under the column header `R::COLUMNS`.
#[derive(Clone, Debug, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Row> Table<R> {
    #[must_use]
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Column names, in output order.
    #[must_use]
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Renders the header and every row as CSV (RFC 4180 quoting, `\n` line endings).
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        push_record(&mut out, R::COLUMNS.iter().copied());
        for row in &self.rows {
            let cells = row.cells();
            debug_assert_eq!(cells.len(), R::COLUMNS.len(), "row width mismatch");
            push_record(&mut out, cells.iter().map(ToString::to_string));
        }

        out
    }

    /// Writes [`Self::to_csv`] into `writer`.
    pub fn write_csv<W: io::Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_csv().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl<R: Row> From<Vec<R>> for Table<R> {
    fn from(rows: Vec<R>) -> Self {
        Self::new(rows)
    }
}

impl<R: Row> FromIterator<R> for Table<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for Table<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'table, R> IntoIterator for &'table Table<R> {
    type Item = &'table R;
    type IntoIter = slice::Iter<'table, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<R> Index<usize> for Table<R> {
    type Output = R;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

fn push_record<I, S>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let field = field.as_ref();
        if field.contains([',', '"', '\n', '\r']) {
            let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair {
        name: String,
        value: Option<i64>,
    }

    impl Row for Pair {
        const COLUMNS: &'static [&'static str] = &["name", "value"];

        fn cells(&self) -> Vec<Cell> {
            vec![Cell::from(self.name.as_str()), Cell::from(self.value)]
        }
    }

    fn pair(name: &str, value: Option<i64>) -> Pair {
        Pair {
            name: name.to_owned(),
            value,
        }
    }

    #[test]
    fn empty_table_should_render_header_only() {
        let table: Table<Pair> = Table::new(Vec::new());

        assert!(table.is_empty(), "table should be empty");
        assert_eq!(table.columns(), ["name", "value"]);
        assert_eq!(table.to_csv(), "name,value\n");
    }

    #[test]
    fn csv_should_quote_special_fields() {
        let table: Table<Pair> = vec![
            pair("plain", Some(1)),
            pair("with \"quotes\"", None),
            pair("multi\nline", Some(-3)),
        ]
        .into();

        assert_eq!(
            table.to_csv(),
            "name,value\nplain,1\n\"with \"\"quotes\"\"\",\n\"multi\nline\",-3\n"
        );
    }

    #[test]
    fn write_csv_should_match_to_csv() -> Result<()> {
        let table: Table<Pair> = std::iter::once(pair("a", Some(2))).collect();

        let mut buffer = Vec::new();
        table.write_csv(&mut buffer)?;

        assert_eq!(String::from_utf8_lossy(&buffer), table.to_csv());
        assert_eq!(table[0], pair("a", Some(2)));
        Ok(())
    }

    #[test]
    fn cell_display_should_succeed() {
        assert_eq!(Cell::from(true).to_string(), "true");
        assert_eq!(Cell::from(None::<bool>).to_string(), "");
        assert_eq!(Cell::from(42_i64).to_string(), "42");
        assert_eq!(Cell::from("Dev").to_string(), "Dev");
    }
}
