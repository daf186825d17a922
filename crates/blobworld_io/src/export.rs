//! Row-oriented CSV export of the statistics log.
//!
//! One header line with [`TickStats::COLUMNS`], then one row per tick.
//! Trait summaries of an empty population are written as empty cells.

use crate::error::{IoError, Result};
use blobworld_data::{TickStats, TraitSummary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn summary_cells(summary: Option<&TraitSummary>) -> [String; 3] {
    match summary {
        Some(s) => [
            format!("{}", s.mean),
            format!("{}", s.min),
            format!("{}", s.max),
        ],
        None => [String::new(), String::new(), String::new()],
    }
}

/// Cells of one row, in [`TickStats::COLUMNS`] order.
#[must_use]
pub fn row_cells(stats: &TickStats) -> Vec<String> {
    let mut cells = Vec::with_capacity(TickStats::COLUMNS.len());
    cells.push(stats.tick.to_string());
    cells.push(stats.blob_count.to_string());
    cells.push(stats.food_count.to_string());
    cells.extend(summary_cells(stats.speed.as_ref()));
    cells.extend(summary_cells(stats.size.as_ref()));
    cells.extend(summary_cells(stats.energy.as_ref()));
    cells.push(stats.births.to_string());
    cells.push(stats.deaths.to_string());
    cells.push(stats.food_eaten.to_string());
    cells.push(stats.total_offspring.to_string());
    cells.push(stats.total_mutations.to_string());
    cells
}

pub fn write_csv<'a, W, I>(mut out: W, rows: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a TickStats>,
{
    writeln!(out, "{}", TickStats::COLUMNS.join(","))?;
    let mut written = 0;
    for stats in rows {
        writeln!(out, "{}", row_cells(stats).join(","))?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Writes `rows` to `path`, creating parent directories. Returns the row count.
pub fn export_csv<'a, P, I>(path: P, rows: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a TickStats>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)
        .map_err(|e| IoError::from(e).with_context(format!("creating {}", path.display())))?;
    let written = write_csv(BufWriter::new(file), rows)?;
    tracing::info!(path = %path.display(), rows = written, "Exported statistics");
    Ok(written)
}
