use crate::core::data::snapshot::RenderSnapshot;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryError {
    Empty,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pop on an empty render history"),
        }
    }
}

impl Error for HistoryError {}

/// LIFO stack of past renderings, enabling exact restoration on zoom-out.
///
/// Entries are owned values pushed by copy; nothing outside the stack aliases
/// them. Popping an empty stack is an explicit error rather than a trusted
/// caller assumption.
#[derive(Debug, Default)]
pub struct RenderHistory {
    entries: Vec<RenderSnapshot>,
}

impl RenderHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: RenderSnapshot) {
        self.entries.push(snapshot);
    }

    /// Removes and returns the most recent snapshot, exposing the one beneath.
    pub fn pop(&mut self) -> Result<RenderSnapshot, HistoryError> {
        self.entries.pop().ok_or(HistoryError::Empty)
    }

    /// The most recent snapshot, if any, without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&RenderSnapshot> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::pixel_grid::PixelGrid;
    use crate::core::data::viewport::Viewport;

    fn snapshot(zoom: u64) -> RenderSnapshot {
        let size = GridSize::new(2, 2).unwrap();
        let viewport = Viewport::new(-2.0, 2.0, 2.0, -2.0, zoom).unwrap();

        RenderSnapshot {
            grid: PixelGrid::new(size),
            viewport,
        }
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = RenderHistory::new();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.top().is_none());
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = RenderHistory::new();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        assert_eq!(history.pop().unwrap().viewport.zoom(), 3);
        assert_eq!(history.pop().unwrap().viewport.zoom(), 2);
        assert_eq!(history.pop().unwrap().viewport.zoom(), 1);
    }

    #[test]
    fn test_pop_on_empty_history_fails() {
        let mut history = RenderHistory::new();

        assert_eq!(history.pop().unwrap_err(), HistoryError::Empty);
    }

    #[test]
    fn test_top_exposes_most_recent_without_removing() {
        let mut history = RenderHistory::new();
        history.push(snapshot(1));
        history.push(snapshot(2));

        assert_eq!(history.top().unwrap().viewport.zoom(), 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_len_tracks_pushes_and_pops() {
        let mut history = RenderHistory::new();
        history.push(snapshot(1));
        history.push(snapshot(2));
        let _ = history.pop();

        assert_eq!(history.len(), 1);
    }
}
