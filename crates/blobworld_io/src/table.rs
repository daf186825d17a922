//! Reading exported statistics back for analysis.
//!
//! Cells are numeric; a blank cell is a missing value (a trait summary taken
//! over an empty population).

use crate::error::{IoError, Result};
use std::io::Write;
use std::path::Path;

/// Column-named numeric table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<f64>>>,
}

/// Requested column names split into those present and those not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSelection {
    pub valid: Vec<String>,
    pub missing: Vec<String>,
}

/// Mean and extrema of a column, skipping missing cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub first: f64,
    pub last: f64,
}

impl StatsTable {
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| IoError::validation("missing header line"))?;
        let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

        let mut rows = Vec::new();
        for (idx, line) in lines {
            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() != columns.len() {
                return Err(IoError::parse(
                    idx + 1,
                    format!("expected {} fields, found {}", columns.len(), cells.len()),
                ));
            }
            let mut row = Vec::with_capacity(cells.len());
            for cell in cells {
                let cell = cell.trim();
                if cell.is_empty() {
                    row.push(None);
                } else {
                    let value = cell
                        .parse::<f64>()
                        .map_err(|e| IoError::parse(idx + 1, format!("`{}`: {}", cell, e)))?;
                    row.push(Some(value));
                }
            }
            rows.push(row);
        }
        Ok(Self { columns, rows })
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::not_found(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text).map_err(|e| e.with_context(format!("reading {}", path.display())))
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Splits `requested` by presence, keeping request order and dropping repeats.
    #[must_use]
    pub fn select<S: AsRef<str>>(&self, requested: &[S]) -> ColumnSelection {
        let mut selection = ColumnSelection::default();
        for name in requested {
            let name = name.as_ref().to_string();
            if selection.valid.contains(&name) || selection.missing.contains(&name) {
                continue;
            }
            if self.columns.contains(&name) {
                selection.valid.push(name);
            } else {
                selection.missing.push(name);
            }
        }
        selection
    }

    #[must_use]
    pub fn summarize(&self, name: &str) -> Option<ColumnSummary> {
        let values: Vec<f64> = self.column(name)?.into_iter().flatten().collect();
        let first = *values.first()?;
        let last = *values.last()?;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(ColumnSummary {
            count: values.len(),
            mean: values.iter().sum::<f64>() / values.len() as f64,
            min,
            max,
            first,
            last,
        })
    }

    /// Keeps `key` untouched and min-max scales each of `columns` into [0, 1].
    ///
    /// Unknown names are skipped.
    #[must_use]
    pub fn normalized<S: AsRef<str>>(&self, key: &str, columns: &[S]) -> Self {
        let mut names = Vec::new();
        let mut data: Vec<Vec<Option<f64>>> = Vec::new();

        if let Some(values) = self.column(key) {
            names.push(key.to_string());
            data.push(values);
        }
        for name in columns {
            let name = name.as_ref();
            if name == key {
                continue;
            }
            if let Some(values) = self.column(name) {
                names.push(name.to_string());
                data.push(min_max_normalize(&values));
            }
        }

        let rows = (0..self.rows.len())
            .map(|r| data.iter().map(|col| col[r]).collect())
            .collect();
        Self {
            columns: names,
            rows,
        }
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.columns.join(","))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|c| c.map(|v| v.to_string()).unwrap_or_default())
                .collect();
            writeln!(out, "{}", cells.join(","))?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Min-max scales `values` into [0, 1]; a constant column maps to 0.
///
/// Missing values stay missing and do not take part in the range.
#[must_use]
pub fn min_max_normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let (min, max) = values
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    values
        .iter()
        .map(|v| {
            v.map(|v| {
                if range > 0.0 {
                    (v - min) / range
                } else {
                    0.0
                }
            })
        })
        .collect()
}
