use std::collections::BTreeMap;

/// Sparse sample-index -> letter mapping. Only uppercase ASCII letters are
/// stored; absence means unlabeled. Duplicate letters across indices are
/// allowed on purpose.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    labels: BTreeMap<usize, char>,
}

impl LabelMap {
    pub fn get(&self, index: usize) -> Option<char> {
        self.labels.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Set or overwrite the label at `index`. Lowercase input is uppercased;
    /// anything outside A-Z is rejected and the map is left unchanged.
    pub fn assign(&mut self, index: usize, letter: char) -> bool {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return false;
        }
        self.labels.insert(index, upper);
        true
    }

    /// Remove the label at `index`; clearing an unlabeled index is a no-op.
    pub fn clear(&mut self, index: usize) -> bool {
        self.labels.remove(&index).is_some()
    }

    pub fn clear_all(&mut self) {
        self.labels.clear();
    }
}
