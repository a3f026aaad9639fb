//! Document abstraction and the in-memory document used by tests and demos.

use std::collections::{BTreeSet, HashMap};

use shared::domain::{ElementId, HashTarget};

/// The document surface the controller mutates. All navigation side effects
/// (class toggles, scroll, history) go through this boundary.
pub trait Dom {
    /// Adds (`present == true`) or removes a class on an element.
    fn set_class(&mut self, element: ElementId, class: &str, present: bool);
    /// Scrolls the viewport to the top-left corner.
    fn scroll_to_top(&mut self);
    /// Locks or unlocks document scrolling while the menu overlays the page.
    fn set_scroll_locked(&mut self, locked: bool);
    /// Pushes a new history entry for the target without a reload.
    fn push_hash(&mut self, target: &HashTarget);
    /// Hash of the current history entry, if any.
    fn current_hash(&self) -> Option<HashTarget>;
}

/// In-memory document with a browser-style linear hash history.
///
/// Elements are plain class sets; history is a vector of entries with a
/// cursor, and pushing after going back discards the forward entries the way
/// a browser does.
#[derive(Debug)]
pub struct MemoryDom {
    next_element: u64,
    classes: HashMap<ElementId, BTreeSet<String>>,
    scroll_position: (f32, f32),
    scroll_locked: bool,
    history: Vec<Option<HashTarget>>,
    cursor: usize,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::with_initial_hash(None)
    }

    /// Document whose initial load carried the given hash.
    pub fn with_initial_hash(hash: Option<HashTarget>) -> Self {
        Self {
            next_element: 0,
            classes: HashMap::new(),
            scroll_position: (0.0, 0.0),
            scroll_locked: false,
            history: vec![hash],
            cursor: 0,
        }
    }

    pub fn create_element(&mut self) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element += 1;
        self.classes.insert(id, BTreeSet::new());
        id
    }

    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn scroll_position(&self) -> (f32, f32) {
        self.scroll_position
    }

    pub fn set_scroll_position(&mut self, x: f32, y: f32) {
        self.scroll_position = (x, y);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Browser back. Returns `false` at the oldest entry. The caller is
    /// responsible for delivering the popstate to the controller.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Browser forward. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for MemoryDom {
    fn set_class(&mut self, element: ElementId, class: &str, present: bool) {
        let classes = self.classes.entry(element).or_default();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_position = (0.0, 0.0);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn push_hash(&mut self, target: &HashTarget) {
        self.history.truncate(self.cursor + 1);
        self.history.push(Some(target.clone()));
        self.cursor = self.history.len() - 1;
    }

    fn current_hash(&self) -> Option<HashTarget> {
        self.history.get(self.cursor).cloned().flatten()
    }
}

#[cfg(test)]
#[path = "tests/dom_tests.rs"]
mod tests;
