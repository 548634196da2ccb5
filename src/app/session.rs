use crate::wave::SampleBuffer;

use super::labels::LabelMap;
use super::selection::Selection;

/// Everything the timeline edits, independent of rendering: the installed
/// presentation buffer, the shared selection, and the label map. All
/// mutations go through these methods so the invariants (selection and label
/// keys always < len) hold in one place and the state is testable headless.
#[derive(Debug, Clone, Default)]
pub struct Session {
    buffer: Option<SampleBuffer>,
    pub selection: Selection,
    pub labels: LabelMap,
}

impl Session {
    pub fn buffer(&self) -> Option<&SampleBuffer> {
        self.buffer.as_ref()
    }

    pub fn len(&self) -> usize {
        self.buffer.as_ref().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_loaded(&self) -> bool {
        self.len() > 0
    }

    /// Replace the buffer wholesale. Old labels and the selection are
    /// discarded since their indices no longer address the same audio.
    pub fn install(&mut self, buffer: SampleBuffer) {
        self.buffer = Some(buffer);
        self.selection.deselect();
        self.labels.clear_all();
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.selection.select(index, self.len())
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
    }

    pub fn move_left(&mut self) -> bool {
        self.selection.move_left()
    }

    pub fn move_right(&mut self) -> bool {
        self.selection.move_right(self.len())
    }

    /// Assign `letter` at the current selection; inert when nothing is
    /// selected or the character is not A-Z.
    pub fn assign_label(&mut self, letter: char) -> bool {
        match self.selection.index() {
            Some(i) => self.labels.assign(i, letter),
            None => false,
        }
    }

    /// Clear the label at the current selection (Backspace/Delete).
    pub fn clear_label(&mut self) -> bool {
        match self.selection.index() {
            Some(i) => self.labels.clear(i),
            None => false,
        }
    }

    pub fn label_at(&self, index: usize) -> Option<char> {
        self.labels.get(index)
    }
}
