use crate::error::Result;
use blobworld_data::TickStats;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one JSON object per tick to `<dir>/ticks.jsonl`.
pub struct TickLogger {
    live_file: Option<BufWriter<File>>,
    path: Option<PathBuf>,
}

impl TickLogger {
    /// Starts a fresh log in `dir`, replacing any previous run's file.
    pub fn new_at<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
        let path = dir.join("ticks.jsonl");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            path: Some(path),
        })
    }

    /// A logger that drops everything, for runs without an output directory.
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            path: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn log_tick(&mut self, stats: &TickStats) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(stats)?;
            writeln!(file, "{}", json)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            file.flush()?;
        }
        Ok(())
    }
}

impl Drop for TickLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush tick log: {}", e);
        }
    }
}

/// Reads back a tick log, skipping lines that do not parse.
pub fn read_ticks<P: AsRef<Path>>(path: P) -> Result<Vec<TickStats>> {
    let file = match File::open(path.as_ref()) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(e.into()),
    };
    let reader = BufReader::new(file);
    let mut ticks = Vec::new();
    for line in reader.lines().map_while(std::io::Result::ok) {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<TickStats>(&line) {
            Ok(stats) => ticks.push(stats),
            Err(e) => tracing::warn!("Skipping malformed tick record: {}", e),
        }
    }
    Ok(ticks)
}
