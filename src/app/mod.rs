//! Headless run loop and end-of-run export.

pub mod shutdown;

use crate::model::config::AppConfig;
use crate::model::world::World;
use crate::ui::renderer::Renderer;
use anyhow::Context;
use blobworld_io::{RunSummary, TickLogger};
use shutdown::{ShutdownHandle, ShutdownManager};
use std::path::{Path, PathBuf};

/// Why the run loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The termination signal was raised.
    Interrupted,
    /// `max_ticks` was reached.
    TickLimit,
    /// No blob is left and `stop_on_extinction` is set.
    Extinct,
}

/// Files written by [`App::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub stats: PathBuf,
    pub ticks: Option<PathBuf>,
    pub summary: PathBuf,
}

pub struct App {
    pub world: World,
    shutdown: ShutdownManager,
    output_dir: Option<PathBuf>,
    tick_logger: TickLogger,
}

impl App {
    /// Builds the world and, when `output_dir` is set, opens the tick log in it.
    pub fn new(config: AppConfig, output_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let world = World::new(config)?;
        let tick_logger = match &output_dir {
            Some(dir) => TickLogger::new_at(dir)
                .with_context(|| format!("opening tick log in {}", dir.display()))?,
            None => TickLogger::new_dummy(),
        };
        Ok(Self {
            world,
            shutdown: ShutdownManager::new(),
            output_dir,
            tick_logger,
        })
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.handle()
    }

    pub fn shutdown_manager_mut(&mut self) -> &mut ShutdownManager {
        &mut self.shutdown
    }

    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    fn tick_limit_reached(&self) -> bool {
        self.world
            .config
            .world
            .max_ticks
            .is_some_and(|max| self.world.tick >= max)
    }

    /// Steps the world until it is interrupted, hits its tick limit or dies out.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> anyhow::Result<RunOutcome> {
        tracing::info!(
            seed = self.world.seed(),
            max_ticks = ?self.world.config.world.max_ticks,
            "Starting simulation"
        );

        let outcome = loop {
            if self.shutdown.is_shutdown_requested() {
                break RunOutcome::Interrupted;
            }
            if self.tick_limit_reached() {
                break RunOutcome::TickLimit;
            }

            let stats = self.world.update()?;
            self.tick_logger.log_tick(&stats)?;

            if renderer.wants_frames() {
                renderer.render(&self.world.snapshot())?;
            }

            if stats.blob_count == 0 && self.world.config.world.stop_on_extinction {
                tracing::info!(tick = stats.tick, "Population extinct");
                break RunOutcome::Extinct;
            }
        };

        let metrics = self.world.metrics();
        tracing::info!(
            tick = self.world.tick,
            outcome = ?outcome,
            mean_tick_us = metrics.mean_tick_duration().as_micros() as u64,
            elapsed_ms = metrics.elapsed().as_millis() as u64,
            "Simulation stopped"
        );
        Ok(outcome)
    }

    /// Flushes the tick log and writes the statistics table and run summary.
    ///
    /// Returns `None` when there is no output directory or export is disabled.
    pub fn finish(&mut self) -> anyhow::Result<Option<ExportPaths>> {
        self.tick_logger.flush()?;
        let Some(dir) = self.output_dir.clone() else {
            return Ok(None);
        };
        if !self.shutdown.should_export_on_exit() {
            tracing::info!("Export on exit disabled");
            return Ok(None);
        }

        let stats = dir.join("stats.csv");
        blobworld_io::export_csv(&stats, self.world.history().iter())
            .with_context(|| format!("exporting statistics to {}", stats.display()))?;

        let summary_path = dir.join("summary.json");
        let summary = RunSummary::new(
            &self.world.config,
            Some(self.world.seed()),
            self.world.history(),
            self.world.totals(),
        );
        blobworld_io::write_json_file(&summary, &summary_path)?;

        tracing::info!(dir = %dir.display(), "Run exported");
        Ok(Some(ExportPaths {
            stats,
            ticks: self.tick_logger.path().map(Path::to_path_buf),
            summary: summary_path,
        }))
    }
}
