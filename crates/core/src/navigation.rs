//! Navigation history.
//!
//! Every navigation pushes a new [`NavigationEntry`]; `back` pops one. The
//! stack starts with a single Home entry that is never popped, so there is
//! always a current entry.

use serde::Serialize;

use crate::selection::ListingFilter;
use crate::types::Page;

/// One visited page, with the filter it was opened with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub page: Page,
    pub filter: Option<ListingFilter>,
}

impl NavigationEntry {
    #[must_use]
    pub const fn new(page: Page, filter: Option<ListingFilter>) -> Self {
        Self { page, filter }
    }

    #[must_use]
    pub const fn home() -> Self {
        Self::new(Page::Home, None)
    }
}

/// Append-only history of visited pages, with pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    root: NavigationEntry,
    above: Vec<NavigationEntry>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    /// A stack holding only the initial Home entry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: NavigationEntry::home(),
            above: Vec::new(),
        }
    }

    /// Push a new entry. Revisiting a page, even with the same filter, still
    /// pushes.
    pub fn navigate_to(&mut self, page: Page, filter: Option<ListingFilter>) {
        self.above.push(NavigationEntry::new(page, filter));
    }

    /// Pop the current entry if another remains beneath it.
    ///
    /// Returns `false` (and leaves the stack untouched) on a single-entry
    /// stack.
    pub fn back(&mut self) -> bool {
        self.above.pop().is_some()
    }

    /// Whether [`back`](Self::back) would change the stack.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.above.is_empty()
    }

    /// The current (top) entry.
    #[must_use]
    pub fn current(&self) -> &NavigationEntry {
        self.above.last().unwrap_or(&self.root)
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.current().page
    }

    #[must_use]
    pub fn current_filter(&self) -> Option<&ListingFilter> {
        self.current().filter.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.above.len() + 1
    }

    /// Always `false`; the root entry is never popped.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Entries from oldest to current.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        core::iter::once(&self.root).chain(self.above.iter())
    }
}
