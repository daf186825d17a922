use anyhow::Context;
use blobworld_io::table::StatsTable;
use blobworld_io::RunSummary;
use blobworld_tools::report;
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize an exported blobworld statistics table", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "output/stats.csv")]
    input: String,

    /// Columns to report; defaults to population and trait means
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Run summary written alongside the table
    #[arg(short, long)]
    summary: Option<String>,

    #[arg(short, long, default_value = "report.md")]
    output: String,

    /// Also write the selected columns min-max scaled into [0, 1]
    #[arg(short, long)]
    normalized: Option<String>,
}

fn main() -> anyhow::Result<()> {
    blobworld_core::init_logging();
    let args = Args::parse();

    let table = StatsTable::read(&args.input)
        .with_context(|| format!("loading statistics from {}", args.input))?;

    let requested: Vec<String> = if args.columns.is_empty() {
        report::DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        args.columns.clone()
    };
    let selection = table.select(&requested);
    if !selection.missing.is_empty() {
        tracing::warn!(
            "These columns were not found and will be skipped: {:?}",
            selection.missing
        );
    }
    if selection.valid.is_empty() {
        anyhow::bail!(
            "no valid columns selected; available columns: {}",
            table.columns().join(", ")
        );
    }

    let summary = match &args.summary {
        Some(path) => Some(
            blobworld_io::read_json_file::<RunSummary, _>(path)
                .with_context(|| format!("loading run summary from {}", path))?,
        ),
        None => None,
    };

    let text = report::render(&args.input, &table, &selection, summary.as_ref());
    std::fs::write(&args.output, text)?;
    tracing::info!("Report generated: {}", args.output);

    if let Some(path) = &args.normalized {
        let scaled = table.normalized("tick", &selection.valid);
        scaled.write_csv(BufWriter::new(File::create(path)?))?;
        tracing::info!("Normalized table written: {}", path);
    }

    Ok(())
}
