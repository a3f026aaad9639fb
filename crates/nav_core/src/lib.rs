//! Hash-routed navigation controller for a single-page site.
//!
//! The controller is handed its element bindings up front and owns the menu
//! state machine; every document mutation flows through the [`Dom`] trait so
//! the host decides what a "document" actually is. [`MemoryDom`] is the
//! reference host used by tests and the demo app.

use std::collections::HashSet;

use shared::{
    domain::{ElementId, HashTarget, MenuState, PageId},
    error::ContractError,
};
use tracing::debug;

mod dom;

pub use dom::{Dom, MemoryDom};

/// Class marking the active page section or navigation link.
pub const ACTIVE_CLASS: &str = "active";
/// Class hiding the menu container and whichever toggle icon is off duty.
pub const HIDDEN_CLASS: &str = "hidden";

/// A page section element and the identifier it is addressed by.
#[derive(Debug, Clone)]
pub struct PageBinding {
    pub page_id: PageId,
    pub element: ElementId,
}

/// A navigation link element and its href target.
#[derive(Debug, Clone)]
pub struct LinkBinding {
    pub href: HashTarget,
    pub element: ElementId,
}

/// Elements making up the mobile menu: the collapsible container and the
/// mutually exclusive open/close toggle icons.
#[derive(Debug, Clone, Copy)]
pub struct MenuBindings {
    pub container: ElementId,
    pub open_icon: ElementId,
    pub close_icon: ElementId,
}

/// Navigation controller over host-bound elements.
///
/// Construction validates the structural contract (default page present, page
/// identifiers unique); every operation afterwards is infallible, as any
/// target either matches a page or falls back to the default page.
#[derive(Debug)]
pub struct NavController {
    pages: Vec<PageBinding>,
    nav_links: Vec<LinkBinding>,
    menu: MenuBindings,
    default_page: PageId,
    default_element: ElementId,
    menu_state: MenuState,
    active_page: PageId,
}

impl NavController {
    pub fn new(
        pages: Vec<PageBinding>,
        nav_links: Vec<LinkBinding>,
        menu: MenuBindings,
        default_page: PageId,
    ) -> Result<Self, ContractError> {
        if pages.is_empty() {
            return Err(ContractError::NoPages);
        }
        let mut seen = HashSet::new();
        for binding in &pages {
            if !seen.insert(binding.page_id.clone()) {
                return Err(ContractError::DuplicatePage(binding.page_id.clone()));
            }
        }
        let default_element = pages
            .iter()
            .find(|binding| binding.page_id == default_page)
            .map(|binding| binding.element)
            .ok_or_else(|| ContractError::MissingDefaultPage(default_page.clone()))?;

        let active_page = default_page.clone();
        Ok(Self {
            pages,
            nav_links,
            menu,
            default_page,
            default_element,
            menu_state: MenuState::Closed,
            active_page,
        })
    }

    /// Establishes initial page/link state from the document's current hash,
    /// without requiring a click.
    pub fn init<D: Dom>(&mut self, dom: &mut D) {
        let hash = dom.current_hash();
        self.show(dom, hash.as_ref());
    }

    /// Makes exactly one page active: the one addressed by `target`, or the
    /// default page when `target` is absent or matches nothing. Links whose
    /// href equals the requested target byte-for-byte are highlighted. Always
    /// closes the menu, unlocks scroll, and scrolls to the top-left.
    pub fn show<D: Dom>(&mut self, dom: &mut D, target: Option<&HashTarget>) {
        let effective = target
            .cloned()
            .unwrap_or_else(|| HashTarget::for_page(&self.default_page));

        let mut page_found = false;
        for binding in &self.pages {
            let is_target = effective.matches_page(&binding.page_id);
            dom.set_class(binding.element, ACTIVE_CLASS, is_target);
            if is_target {
                page_found = true;
                self.active_page = binding.page_id.clone();
            }
        }
        if !page_found {
            dom.set_class(self.default_element, ACTIVE_CLASS, true);
            self.active_page = self.default_page.clone();
        }

        // Exact string comparison, independent of the page fallback: an
        // unmatched target highlights no link even while the default page
        // is shown.
        for link in &self.nav_links {
            dom.set_class(link.element, ACTIVE_CLASS, link.href == effective);
        }

        self.close_menu(dom);
        dom.scroll_to_top();
        debug!(
            requested = %effective,
            active = %self.active_page,
            fell_back = !page_found,
            "navigated"
        );
    }

    /// Click on an internal page link (default navigation suppressed by the
    /// host). Pushes a history entry only when the href differs from the
    /// current hash, so re-clicking the active link does not stack duplicate
    /// entries.
    pub fn handle_link_click<D: Dom>(&mut self, dom: &mut D, href: &HashTarget) {
        if dom.current_hash().as_ref() != Some(href) {
            dom.push_hash(href);
        }
        self.show(dom, Some(href));
    }

    /// Back/forward navigation. The document already updated its hash, so
    /// history is left untouched.
    pub fn handle_popstate<D: Dom>(&mut self, dom: &mut D) {
        let hash = dom.current_hash();
        self.show(dom, hash.as_ref());
    }

    /// Flips the mobile menu and keeps the icon pair and scroll lock in
    /// lockstep with its visibility.
    pub fn toggle_menu<D: Dom>(&mut self, dom: &mut D) {
        match self.menu_state {
            MenuState::Open => self.close_menu(dom),
            MenuState::Closed => self.open_menu(dom),
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu_state
    }

    /// Page most recently marked active; the default page before `init`.
    pub fn active_page(&self) -> &PageId {
        &self.active_page
    }

    fn open_menu<D: Dom>(&mut self, dom: &mut D) {
        dom.set_class(self.menu.container, HIDDEN_CLASS, false);
        dom.set_class(self.menu.open_icon, HIDDEN_CLASS, true);
        dom.set_class(self.menu.close_icon, HIDDEN_CLASS, false);
        dom.set_scroll_locked(true);
        self.menu_state = MenuState::Open;
    }

    fn close_menu<D: Dom>(&mut self, dom: &mut D) {
        dom.set_class(self.menu.container, HIDDEN_CLASS, true);
        dom.set_class(self.menu.open_icon, HIDDEN_CLASS, false);
        dom.set_class(self.menu.close_icon, HIDDEN_CLASS, true);
        dom.set_scroll_locked(false);
        self.menu_state = MenuState::Closed;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
