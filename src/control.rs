use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pause and cancel signals shared between a running experiment and whoever
/// controls it. Cloning yields another handle to the same flags.
///
/// Both flags are advisory: the driver only looks at them between units of
/// work, never in the middle of a sort call.
#[derive(Debug, Clone, Default)]
pub struct RunControl {
    inner: Arc<Flags>,
}

#[derive(Debug, Default)]
struct Flags {
    cancelled: AtomicBool,
    paused: AtomicBool,
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    pub fn pause(&self) {
        self.inner.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.inner.paused.store(false, Ordering::SeqCst);
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&self) -> bool {
        !self.inner.paused.fetch_xor(true, Ordering::SeqCst)
    }

    pub fn is_paused(&self) -> bool {
        self.inner.paused.load(Ordering::SeqCst)
    }

    /// Clear both flags.
    pub fn reset(&self) {
        self.inner.cancelled.store(false, Ordering::SeqCst);
        self.inner.paused.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flags() {
        let control = RunControl::new();
        let other = control.clone();

        other.cancel();
        assert!(control.is_cancelled());

        assert!(control.toggle_pause());
        assert!(other.is_paused());
        assert!(!other.toggle_pause());
        assert!(!control.is_paused());

        control.pause();
        control.reset();
        assert!(!other.is_cancelled());
        assert!(!other.is_paused());
    }
}
