/// Single shared sample selection: `Unselected` or `Selected(index)`.
/// The same index is highlighted on every track, so there is exactly one
/// selection for the whole timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Select `index` if it addresses a sample (< len). Out-of-range requests
    /// leave the current selection untouched. Returns true on a transition
    /// into `Selected`, which is what triggers highlight and auto-scroll.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.index = Some(index);
        true
    }

    pub fn deselect(&mut self) {
        self.index = None;
    }

    /// Move one sample left; no-op when unselected or already at 0.
    pub fn move_left(&mut self) -> bool {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Move one sample right, clamped to len-1; no-op at the boundary.
    pub fn move_right(&mut self, len: usize) -> bool {
        match self.index {
            Some(i) if i + 1 < len => {
                self.index = Some(i + 1);
                true
            }
            _ => false,
        }
    }
}
