use std::collections::BTreeSet;

/// Edit-session state tracking an original and a selected set, used by
/// the role editor for permission ids and usernames.
///
/// The diff is minimal by construction: an element appears in at most
/// one of the add/remove lists, and applying the diff to the original
/// set reproduces the selection exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<T: Ord + Clone> {
    original: BTreeSet<T>,
    selected: BTreeSet<T>,
}

impl<T: Ord + Clone> Selection<T> {
    /// Seeds both sets from the state loaded off the backend.
    pub fn seeded(original: impl IntoIterator<Item = T>) -> Self {
        let original: BTreeSet<T> = original.into_iter().collect();
        Self {
            selected: original.clone(),
            original,
        }
    }

    /// Returns true when the element is currently selected.
    pub fn contains(&self, element: &T) -> bool {
        self.selected.contains(element)
    }

    /// Selects or deselects one element.
    pub fn toggle(&mut self, element: T, checked: bool) {
        if checked {
            self.selected.insert(element);
        } else {
            self.selected.remove(&element);
        }
    }

    /// Deselects everything; the original set is untouched.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Snapshot of the current selection.
    pub fn selected(&self) -> Vec<T> {
        self.selected.iter().cloned().collect()
    }

    /// Elements selected now but absent from the original set.
    pub fn added(&self) -> Vec<T> {
        self.selected.difference(&self.original).cloned().collect()
    }

    /// Elements present originally but deselected now.
    pub fn removed(&self) -> Vec<T> {
        self.original.difference(&self.selected).cloned().collect()
    }

    /// Returns true when selection and original state coincide.
    pub fn is_unchanged(&self) -> bool {
        self.selected == self.original
    }
}
