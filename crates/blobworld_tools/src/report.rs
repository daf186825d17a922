use blobworld_io::table::{ColumnSelection, StatsTable};
use blobworld_io::RunSummary;
use std::fmt::Write;

/// Columns reported when none are requested.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "blob_count",
    "food_count",
    "speed_mean",
    "size_mean",
    "energy_mean",
];

/// Renders the markdown report for the valid columns of `selection`.
#[must_use]
pub fn render(
    source: &str,
    table: &StatsTable,
    selection: &ColumnSelection,
    summary: Option<&RunSummary>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Blobworld Run Report\n");
    let _ = writeln!(out, "- **Source**: `{}`", source);
    let _ = writeln!(out, "- **Rows**: {}", table.row_count());
    if let Some(s) = summary {
        let _ = writeln!(out, "- **Config fingerprint**: `{}`", s.config_fingerprint);
        if let Some(seed) = s.seed {
            let _ = writeln!(out, "- **Seed**: {}", seed);
        }
        let _ = writeln!(out, "- **Ticks**: {}", s.ticks);
        let _ = writeln!(out, "- **Peak population**: {}", s.peak_blobs);
        let _ = writeln!(out, "- **Total offspring**: {}", s.totals.total_offspring);
        let _ = writeln!(out, "- **Total mutations**: {}", s.totals.total_mutations);
        if s.extinct {
            let _ = writeln!(out, "- **Outcome**: extinct");
        }
    }

    let _ = writeln!(out, "\n## Columns\n");
    let _ = writeln!(out, "| column | samples | mean | min | max | first | last |");
    let _ = writeln!(out, "|---|---|---|---|---|---|---|");
    for name in &selection.valid {
        match table.summarize(name) {
            Some(s) => {
                let _ = writeln!(
                    out,
                    "| {} | {} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} |",
                    name, s.count, s.mean, s.min, s.max, s.first, s.last
                );
            }
            None => {
                let _ = writeln!(out, "| {} | 0 | - | - | - | - | - |", name);
            }
        }
    }

    if !selection.missing.is_empty() {
        let _ = writeln!(out, "\n## Skipped\n");
        for name in &selection.missing {
            let _ = writeln!(out, "- `{}` (not in table)", name);
        }
    }
    out
}
