//! Foreground/background state of the consuming application

use std::sync::atomic::{AtomicBool, Ordering};

/// Records whether the application can take direct delivery
///
/// Last write wins, no history. Starts backgrounded: until the UI layer
/// announces itself, messages are queued and surfaced as notifications
/// rather than handed to an application that may not be listening.
#[derive(Debug, Default)]
pub struct ForegroundTracker {
    foreground: AtomicBool,
}

impl ForegroundTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_foreground(&self, foreground: bool) {
        self.foreground.store(foreground, Ordering::SeqCst);
    }

    pub fn is_foreground(&self) -> bool {
        self.foreground.load(Ordering::SeqCst)
    }
}
