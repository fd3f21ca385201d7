//! Balanced body-scroll suppression.
//!
//! Every mounted overlay holds a `ScrollLockGuard`. The body is locked when
//! the first guard is taken and unlocked when the last one drops, so rapid
//! open/close cycles can never leave the page stuck.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// The host document's `<body>`.
pub trait DocumentBody: Send {
    fn set_scroll_locked(&mut self, locked: bool);
}

struct LockState {
    holders: usize,
    body: Box<dyn DocumentBody>,
}

#[derive(Clone)]
pub struct ScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl std::fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

impl ScrollLock {
    pub fn new(body: impl DocumentBody + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(LockState {
                holders: 0,
                body: Box::new(body),
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.lock();
        state.holders += 1;
        if state.holders == 1 {
            debug!("Body scroll locked");
            state.body.set_scroll_locked(true);
        }
        ScrollLockGuard { lock: self.clone() }
    }

    fn release(&self) {
        let mut state = self.state.lock();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            debug!("Body scroll restored");
            state.body.set_scroll_locked(false);
        }
    }

    pub fn holders(&self) -> usize {
        self.state.lock().holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

/// Releases its hold exactly once, on drop.
#[must_use = "the body unlocks as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[derive(Debug, Default)]
struct BodyRecord {
    locked: bool,
    writes: Vec<bool>,
}

/// A body that only remembers what was written to it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBody {
    record: Arc<Mutex<BodyRecord>>,
}

impl InMemoryBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.record.lock().locked
    }

    /// Every value written, in order.
    pub fn writes(&self) -> Vec<bool> {
        self.record.lock().writes.clone()
    }
}

impl DocumentBody for InMemoryBody {
    fn set_scroll_locked(&mut self, locked: bool) {
        let mut record = self.record.lock();
        record.locked = locked;
        record.writes.push(locked);
    }
}
