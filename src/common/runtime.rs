use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag, polled between file operations.
/// Cancellation is advisory: an in-flight overwrite pass finishes
/// before the flag is observed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the current operation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Poll the flag
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Reset for reuse across operations
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// Ensures only one analyze or clean pass runs at a time.
/// Acquiring while held fails; the caller treats that as a no-op.
#[derive(Debug, Default)]
pub struct OpGate {
    running: Arc<AtomicBool>,
}

impl OpGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start an operation. Returns `None` if one is already running.
    pub fn try_acquire(&self) -> Option<OpGuard> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(OpGuard {
                running: Arc::clone(&self.running),
            })
        } else {
            None
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Releases the gate on drop
#[derive(Debug)]
pub struct OpGuard {
    running: Arc<AtomicBool>,
}

impl Drop for OpGuard {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}
