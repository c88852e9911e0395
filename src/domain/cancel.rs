use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Shared flag telling an outstanding load that its result is no longer wanted.
///
/// Clones observe the same flag, so the owner of a view can hand one clone to
/// `ContactStore::load` and keep another to cancel on teardown.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
