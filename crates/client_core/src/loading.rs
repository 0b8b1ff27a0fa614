//! Loading indicator shared between the document and in-flight calls.

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    state: Arc<watch::Sender<LoadingState>>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LoadingState::Hidden);
        Self {
            state: Arc::new(tx),
        }
    }

    pub fn state(&self) -> LoadingState {
        *self.state.borrow()
    }

    pub fn is_visible(&self) -> bool {
        self.state() == LoadingState::Visible
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.state.subscribe()
    }

    pub(crate) fn set(&self, state: LoadingState) {
        self.state.send_replace(state);
    }

    /// Shows the indicator until the returned guard is dropped.
    #[must_use = "the indicator is hidden again as soon as the guard is dropped"]
    pub fn show(&self) -> LoadingGuard {
        self.set(LoadingState::Visible);
        LoadingGuard {
            indicator: self.clone(),
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LoadingGuard {
    indicator: LoadingIndicator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.set(LoadingState::Hidden);
    }
}
