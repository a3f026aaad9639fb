use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle for a host-owned document element. The navigation logic
/// never creates or destroys elements; it only toggles classes on handles
/// the host bound at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Identifier of a page section, e.g. `home` or `contact`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `#fragment` navigation target, stored with its leading `#`.
///
/// Link highlighting compares these byte-for-byte against link hrefs, so two
/// logically equal but differently formatted targets are distinct on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashTarget(String);

impl HashTarget {
    /// Parses a raw fragment as read from a location bar. Empty input and a
    /// bare `#` carry no target and yield `None`.
    pub fn from_fragment(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw == "#" {
            return None;
        }
        match raw.strip_prefix('#') {
            Some(fragment) => Some(Self(format!("#{fragment}"))),
            None => Some(Self(format!("#{raw}"))),
        }
    }

    /// Canonical target for a page, `#<id>`.
    pub fn for_page(page: &PageId) -> Self {
        Self(format!("#{page}"))
    }

    /// Whether this target addresses the given page (`#<id>` equality).
    pub fn matches_page(&self, page: &PageId) -> bool {
        self.0.strip_prefix('#') == Some(page.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragments_carry_no_target() {
        assert_eq!(HashTarget::from_fragment(""), None);
        assert_eq!(HashTarget::from_fragment("#"), None);
    }

    #[test]
    fn fragments_normalize_to_hash_prefixed_form() {
        let with_hash = HashTarget::from_fragment("#about").expect("target");
        let bare = HashTarget::from_fragment("about").expect("target");
        assert_eq!(with_hash, bare);
        assert_eq!(with_hash.as_str(), "#about");
    }

    #[test]
    fn page_matching_requires_exact_identifier() {
        let target = HashTarget::from_fragment("#about").expect("target");
        assert!(target.matches_page(&PageId::new("about")));
        assert!(!target.matches_page(&PageId::new("about-us")));
        assert!(!target.matches_page(&PageId::new("About")));
    }

    #[test]
    fn menu_toggle_round_trips() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Closed.toggled().toggled(), MenuState::Closed);
    }
}
