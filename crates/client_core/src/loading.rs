use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Process-wide "request in flight" flag shared between the network worker
/// and the UI.
///
/// Counts outstanding requests so overlapping fetches keep the indicator
/// asserted until the last one settles.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    outstanding: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserts the indicator until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            outstanding: self.outstanding.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.outstanding() > 0
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }
}

#[must_use = "the indicator clears as soon as the guard is dropped"]
pub struct LoadingGuard {
    outstanding: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.outstanding.fetch_sub(1, Ordering::SeqCst);
    }
}
