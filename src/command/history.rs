use crate::pixel_buffer::{PixelBuffer, Snapshot};

/// Snapshot-based undo stack.
///
/// Every entry is a full copy of the canvas taken just before a mutating
/// gesture. Undo is one-directional: there is no redo stack.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current state of `buffer`
    pub fn push(&mut self, buffer: &PixelBuffer) {
        self.snapshots.push(buffer.snapshot());
    }

    /// Restores the most recent snapshot into `buffer`.
    ///
    /// Returns `false` when there was nothing to undo; the buffer is left
    /// untouched in that case.
    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                buffer.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// The most recent snapshot, i.e. the state before the current gesture
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }

    /// Drops every snapshot
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_undo_on_empty_history_is_a_no_op() {
        let mut history = History::new();
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set_pixel(1, 1, Color::BLACK);
        let before = buffer.clone();

        assert!(!history.undo(&mut buffer));
        assert!(buffer == before);
    }

    #[test]
    fn test_undo_pops_in_reverse_order() {
        let mut history = History::new();
        let mut buffer = PixelBuffer::new(4, 4);
        let blank = buffer.clone();

        history.push(&buffer);
        buffer.set_pixel(0, 0, Color::BLACK);
        let first_edit = buffer.clone();

        history.push(&buffer);
        buffer.set_pixel(3, 3, Color::BLACK);
        assert_eq!(history.len(), 2);

        assert!(history.undo(&mut buffer));
        assert!(buffer == first_edit);
        assert!(history.undo(&mut buffer));
        assert!(buffer == blank);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_last_is_the_latest_snapshot() {
        let mut history = History::new();
        let mut buffer = PixelBuffer::new(2, 2);
        history.push(&buffer);
        buffer.set_pixel(0, 1, Color::BLACK);
        history.push(&buffer);

        let last = history.last().unwrap();
        assert_eq!(last.as_raw(), buffer.as_raw());
        history.clear();
        assert!(history.last().is_none());
    }
}
