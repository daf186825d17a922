//! Rendering collaborators. They only ever see a snapshot taken between ticks.

use crate::model::snapshot::WorldSnapshot;

pub trait Renderer {
    /// Draws one frame.
    fn render(&mut self, snapshot: &WorldSnapshot) -> anyhow::Result<()>;

    /// Whether the run loop should capture snapshots for this renderer.
    fn wants_frames(&self) -> bool {
        true
    }
}

/// Renderer for batch runs; draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessRenderer;

impl Renderer for HeadlessRenderer {
    fn render(&mut self, _snapshot: &WorldSnapshot) -> anyhow::Result<()> {
        Ok(())
    }

    fn wants_frames(&self) -> bool {
        false
    }
}

/// Emits a debug line per frame describing what a drawing backend would draw.
#[derive(Debug, Clone)]
pub struct TraceRenderer {
    every: u64,
    frames: u64,
}

impl TraceRenderer {
    #[must_use]
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for TraceRenderer {
    fn render(&mut self, snapshot: &WorldSnapshot) -> anyhow::Result<()> {
        self.frames += 1;
        if snapshot.tick % self.every == 0 {
            let largest = snapshot.blobs.iter().map(|b| b.radius).max().unwrap_or(0);
            tracing::debug!(
                tick = snapshot.tick,
                blobs = snapshot.blobs.len(),
                food = snapshot.food.len(),
                largest_blob = largest,
                "Frame"
            );
        }
        Ok(())
    }
}
