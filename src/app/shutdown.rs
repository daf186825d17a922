//! Termination signal for the run loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owns the stop flag the run loop polls between ticks.
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    export_on_exit: bool,
}

/// Cloneable requester handed to signal handlers and input collaborators.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown_requested: Arc<AtomicBool>,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            export_on_exit: true,
        }
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown_requested: Arc::clone(&self.shutdown_requested),
        }
    }

    pub fn set_export_on_exit(&mut self, export: bool) {
        self.export_on_exit = export;
    }

    pub fn should_export_on_exit(&self) -> bool {
        self.export_on_exit
    }

    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}

impl ShutdownHandle {
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}
