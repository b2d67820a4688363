//! Load status and dismissible notices shared by the views.

/// Status of a view's initial fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Nothing to show; the page renders a full-page retry state
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Holds at most one notice; a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notices {
    next_id: u64,
    current: Option<Notice>,
}

impl Notices {
    pub fn raise(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice {
            id: self.next_id,
            message: message.into(),
        });
        self.next_id
    }

    /// Dismiss the notice with `id`; a newer notice stays up.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
