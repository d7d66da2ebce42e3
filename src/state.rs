//! Navigation and selection state, shared via Dioxus context.
//!
//! `ViewState` is a plain struct with total transition methods so the whole
//! state machine can be exercised without a running app. Components mutate it
//! through the `SiteContext` signals.

use dioxus::prelude::*;

use crate::catalog::{Artwork, ARTWORKS};
use crate::i18n::Language;

/// Top-level pages reachable from the navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Works,
    About,
    Gallery,
}

impl Page {
    /// Localization key for the page's nav label. Home has no nav entry;
    /// it is reached through the brand mark.
    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::Works => Some("nav.works"),
            Page::Gallery => Some("nav.gallery"),
            Page::About => Some("nav.about"),
        }
    }

    /// Pages shown as navbar links, in display order.
    pub fn nav_pages() -> &'static [Page] {
        &[Page::Works, Page::Gallery, Page::About]
    }

    /// Every page, for exhaustive checks.
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Works, Page::About, Page::Gallery]
    }
}

/// The view the main content region should show. A selected artwork takes
/// priority over whatever page is current; otherwise the page decides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActiveView {
    Detail(&'static Artwork),
    Home,
    Works,
    Gallery,
    About,
}

/// Transient UI state. Reset on every launch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
    current_page: Page,
    /// Index into [`ARTWORKS`]. Kept as an index so a set selection always
    /// refers to a catalog entry.
    selected_artwork: Option<usize>,
    menu_open: bool,
}

impl ViewState {
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The currently selected artwork, if any.
    pub fn selected(&self) -> Option<&'static Artwork> {
        self.selected_artwork.and_then(|i| ARTWORKS.get(i))
    }

    /// Switch pages. Always clears the selection and closes the mobile menu.
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(?page, "navigate");
        self.current_page = page;
        self.selected_artwork = None;
        self.menu_open = false;
    }

    /// Select an artwork by catalog index. An out-of-range index is ignored
    /// rather than breaking the selection invariant.
    pub fn select_artwork(&mut self, index: usize) {
        if index < ARTWORKS.len() {
            tracing::debug!(index, "select artwork");
            self.selected_artwork = Some(index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_artwork = None;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Derive what the content region shows. Pure; the precedence rule is
    /// selection first, page second.
    pub fn active_view(&self) -> ActiveView {
        if let Some(artwork) = self.selected() {
            return ActiveView::Detail(artwork);
        }
        match self.current_page {
            Page::Home => ActiveView::Home,
            Page::Works => ActiveView::Works,
            Page::Gallery => ActiveView::Gallery,
            Page::About => ActiveView::About,
        }
    }
}

/// Shared site state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub view: Signal<ViewState>,
    pub language: Signal<Language>,
}

impl SiteContext {
    /// Translate a key against the active language.
    pub fn t(&self, key: &str) -> String {
        crate::i18n::translate(*self.language.read(), key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = ViewState::default();
        assert_eq!(state.current_page(), Page::Home);
        assert_eq!(state.selected(), None);
        assert!(!state.menu_open());
        assert_eq!(state.active_view(), ActiveView::Home);
    }

    #[test]
    fn navigate_sets_page_clears_selection_closes_menu() {
        for &page in Page::all() {
            let mut state = ViewState::default();
            state.select_artwork(1);
            state.toggle_menu();
            state.navigate(page);
            assert_eq!(state.current_page(), page);
            assert_eq!(state.selected(), None);
            assert!(!state.menu_open());
        }
    }

    #[test]
    fn navigate_is_idempotent() {
        let mut once = ViewState::default();
        once.navigate(Page::Home);
        let mut twice = ViewState::default();
        twice.navigate(Page::Home);
        twice.navigate(Page::Home);
        assert_eq!(once, twice);
    }

    #[test]
    fn selection_overrides_page() {
        for &page in Page::all() {
            let mut state = ViewState::default();
            state.navigate(page);
            state.select_artwork(2);
            assert_eq!(state.active_view(), ActiveView::Detail(&ARTWORKS[2]));
            // Page is untouched by selection.
            assert_eq!(state.current_page(), page);
        }
    }

    #[test]
    fn detail_view_shows_selected_artwork_fields() {
        for (i, artwork) in ARTWORKS.iter().enumerate() {
            let mut state = ViewState::default();
            state.select_artwork(i);
            let ActiveView::Detail(shown) = state.active_view() else {
                panic!("expected detail view");
            };
            assert_eq!(shown.title, artwork.title);
            assert_eq!(shown.technique, artwork.technique);
            assert_eq!(shown.year, artwork.year);
            assert_eq!(shown.dimensions, artwork.dimensions);
            assert_eq!(shown.description, artwork.description);
            assert_eq!(shown.image, artwork.image);
        }
    }

    #[test]
    fn select_then_clear_restores_default_home_view() {
        let mut state = ViewState::default();
        state.select_artwork(0);
        state.clear_selection();
        assert_eq!(state, ViewState::default());
        assert_eq!(state.active_view(), ActiveView::Home);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = ViewState::default();
        state.select_artwork(ARTWORKS.len());
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn menu_toggles_and_navigation_closes_it() {
        let mut state = ViewState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());

        state.toggle_menu();
        state.navigate(Page::Works);
        assert!(!state.menu_open());
    }
}
